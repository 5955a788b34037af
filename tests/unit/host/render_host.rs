use std::sync::Mutex;
use std::time::Instant;

use super::*;
use crate::render::surface::InMemorySurface;

fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    cond()
}

fn host(weather: WeatherType, w: u32, h: u32) -> (RenderHost, crate::render::surface::SurfaceProbe) {
    let surface = InMemorySurface::new(w, h);
    let probe = surface.probe();
    let cfg = HostConfig {
        initial_weather: weather,
        ..HostConfig::default()
    };
    (RenderHost::new(cfg, Box::new(surface)).unwrap(), probe)
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = HostConfig {
        density: -1.0,
        ..HostConfig::default()
    };
    let err = RenderHost::new(cfg, Box::new(InMemorySurface::new(4, 4))).unwrap_err();
    assert!(matches!(err, SkypaintError::Validation(_)));
}

#[test]
fn loop_needs_surface_and_visibility() {
    let (mut host, probe) = host(WeatherType::None, 8, 8);
    assert!(!host.is_running());
    host.visibility_changed(false).unwrap();
    host.surface_created().unwrap();
    assert!(!host.is_running());
    host.visibility_changed(true).unwrap();
    assert!(host.is_running());
    assert!(wait_until(|| probe.presented() > 2));
    host.surface_destroyed().unwrap();
    assert!(!host.is_running());
    let frozen = probe.presented();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(probe.presented(), frozen);
}

#[test]
fn idle_host_paints_white() {
    let (mut host, probe) = host(WeatherType::None, 6, 6);
    host.surface_created().unwrap();
    assert!(wait_until(|| probe.presented() > 0));
    host.shutdown().unwrap();
    assert_eq!(probe.last_pixel(5, 5), Some([255, 255, 255, 255]));
    assert!(host.phase().is_none());
}

#[test]
fn weather_listener_fires_once_per_change() {
    let (mut host, _probe) = host(WeatherType::None, 8, 8);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    host.set_on_weather_changed(move |kind| sink.lock().unwrap().push(kind));
    host.set_weather(WeatherType::Sunny).unwrap();
    host.set_weather(WeatherType::Sunny).unwrap();
    host.surface_created().unwrap();
    host.set_weather(WeatherType::Foggy).unwrap();
    host.shutdown().unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![WeatherType::Sunny, WeatherType::Foggy]);
    assert_eq!(host.weather(), WeatherType::Foggy);
}

#[test]
fn pause_freezes_phase_and_resume_continues() {
    let (mut host, probe) = host(WeatherType::Cloudy, 64, 64);
    host.surface_changed(64, 64).unwrap();
    assert!(wait_until(|| probe.presented() > 3));

    host.started(false).unwrap();
    assert!(host.is_paused());
    let before = host.phase().unwrap();
    let presented = probe.presented();
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(host.phase().unwrap(), before);
    assert_eq!(probe.presented(), presented);

    host.started(true).unwrap();
    assert!(!host.is_paused());
    assert!(wait_until(|| probe.presented() > presented + 2));
    assert_ne!(host.phase().unwrap(), before);
}

#[test]
fn destroyed_surface_ends_loop_quietly() {
    let (mut host, probe) = host(WeatherType::Sandy, 32, 32);
    host.surface_changed(32, 32).unwrap();
    assert!(wait_until(|| probe.presented() > 0));
    probe.mark_destroyed();
    assert!(wait_until(|| host.stats().skipped > 0));
    host.surface_destroyed().unwrap();
    assert!(!host.is_running());
    host.set_weather(WeatherType::Snowy).unwrap();
    assert_eq!(host.phase().map(|p| p.weather), Some(WeatherType::Snowy));
}

#[test]
fn resize_while_stopped_reaches_painter() {
    let (mut host, _probe) = host(WeatherType::Rainy, 16, 16);
    host.visibility_changed(false).unwrap();
    host.surface_changed(120, 90).unwrap();
    assert!(!host.is_running());
    let phase = host.phase().unwrap();
    assert_eq!(phase.get("ripples"), Some(15.0));
}

#[test]
fn drop_joins_running_loop() {
    let (mut host, probe) = host(WeatherType::Hazy, 16, 16);
    host.surface_created().unwrap();
    assert!(wait_until(|| probe.presented() > 0));
    drop(host);
    let after = probe.presented();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(probe.presented(), after);
}
