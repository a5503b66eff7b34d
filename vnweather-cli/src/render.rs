//! Plain-text rendering of core view data.

use vnweather_core::{
    CurrentWeather, DetailView, Palette, SavedCities, WeatherError, format::round_temp,
};

const PLACEHOLDER: &str = "Nhập tên thành phố để xem thời tiết";
const PLACEHOLDER_HINT: &str = "Ví dụ: Hanoi, Ho Chi Minh, London, Tokyo";

pub fn print_placeholder() {
    println!("{PLACEHOLDER}");
    println!("  {PLACEHOLDER_HINT}");
}

pub fn print_error(err: &WeatherError) {
    println!("[{}] {}", err.kind().icon_name(), err.user_message());
}

pub fn print_card(weather: &CurrentWeather, now: i64) {
    println!("{}", card_line(weather, now));
}

fn card_line(weather: &CurrentWeather, now: i64) -> String {
    let place = match &weather.sys.country {
        Some(country) => format!("{}, {}", weather.name, country),
        None => weather.name.clone(),
    };
    let description = weather
        .condition()
        .map(|c| c.description.as_str())
        .unwrap_or("");

    format!(
        "{place:<28} {:>4}°C  {description:<20} {:<12} id {}",
        round_temp(weather.main.temp),
        weather.gradient_at(now),
        weather.id,
    )
}

pub fn print_saved(saved: &SavedCities) {
    if saved.is_empty() {
        print_placeholder();
        return;
    }

    let now = chrono::Utc::now().timestamp();
    for city in saved.iter() {
        print_card(city, now);
    }
}

pub fn print_delete_result(id: u64, removed: bool, still_saved: bool) {
    if removed {
        println!("Đã xóa thành phố (id {id}).");
    } else if still_saved {
        println!("Đã hủy.");
    } else {
        println!("Không có thành phố nào với id {id}.");
    }
}

fn palette_line(palette: &Palette) -> String {
    palette
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn print_detail(view: &DetailView) {
    match &view.country {
        Some(country) => println!("{} {}", view.city, country),
        None => println!("{}", view.city),
    }
    println!("  {}°C  {}", view.temperature, view.description);
    println!("  H: {}°  L: {}°", view.high, view.low);
    if let Some(icon) = &view.icon_url {
        println!("  {icon}");
    }
    println!(
        "  Nền: {} ({}){}",
        view.gradient,
        palette_line(&view.palette()),
        if view.is_night { ", ban đêm" } else { "" }
    );

    println!();
    println!("Dự báo 5 ngày");
    if view.forecast.is_empty() {
        println!("  (không có dữ liệu)");
    }
    for day in &view.forecast {
        println!("  {:<4} {:>4}°", day.day, day.temperature);
    }

    println!();
    println!("Chi tiết thời tiết");
    for item in &view.details {
        println!("  {:<14} {}", item.label, item.value);
    }

    println!();
    println!("  Mặt trời mọc  {}", view.sunrise);
    println!("  Mặt trời lặn  {}", view.sunset);
}
