//! Адрес relay ассистента

/// Порт backend (см. `[server] port` в config.toml)
const RELAY_PORT: &str = "3000";

/// База для запросов к relay
///
/// Если страницу отдаёт сам backend, достаточно относительного пути.
/// Под `trunk serve` (другой порт) запросы идут на тот же хост, порт 3000.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    relay_base(&protocol, &hostname, &port)
}

fn relay_base(protocol: &str, hostname: &str, port: &str) -> String {
    if port == RELAY_PORT {
        String::new()
    } else {
        format!("{}//{}:{}", protocol, hostname, RELAY_PORT)
    }
}

/// Полный URL по пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_when_served_by_backend() {
        assert_eq!(relay_base("http:", "localhost", "3000"), "");
    }

    #[test]
    fn test_dev_server_points_to_relay_port() {
        assert_eq!(
            relay_base("http:", "192.168.1.20", "8080"),
            "http://192.168.1.20:3000"
        );
        assert_eq!(relay_base("https:", "craik.local", ""), "https://craik.local:3000");
    }
}
