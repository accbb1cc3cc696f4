use std::time::Duration;

/// Timing and geometry knobs for the page effects.
///
/// Values are in CSS pixels and milliseconds. The defaults match the
/// stylesheet (`input.css`), so changing one usually means changing the other.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub splash_delay_ms: u64,
    pub observer_start_delay_ms: u64,
    pub navbar_height: f64,
    pub scroll_probe_offset: f64,
    pub follower_size: f64,
    pub reveal_margin: RevealMargin,
}

/// Fractions of the viewport excluded from intersection at the top and bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMargin {
    pub top: f64,
    pub bottom: f64,
}

impl Default for RevealMargin {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.6,
        }
    }
}

impl RevealMargin {
    /// CSS `rootMargin` string for an IntersectionObserver.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top),
            percent(self.bottom)
        )
    }
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 800,
            observer_start_delay_ms: 100,
            navbar_height: 80.0,
            scroll_probe_offset: 100.0,
            follower_size: 20.0,
            reveal_margin: RevealMargin::default(),
        }
    }
}

impl PageConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn observer_start_delay(&self) -> Duration {
        Duration::from_millis(self.observer_start_delay_ms)
    }
}

/// Browser console log level: debug lines only in debug builds.
pub fn console_log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_margin() {
        let config = PageConfig::default();
        assert_eq!(config.reveal_margin.root_margin(), "-20% 0px -60% 0px");
    }

    #[test]
    fn test_custom_margin() {
        let margin = RevealMargin {
            top: 0.1,
            bottom: 0.45,
        };
        assert_eq!(margin.root_margin(), "-10% 0px -45% 0px");
    }

    #[test]
    fn test_delays() {
        let config = PageConfig::default();
        assert_eq!(config.splash_delay(), Duration::from_millis(800));
        assert!(config.observer_start_delay() < config.splash_delay());
    }

    #[test]
    fn test_console_log_level() {
        assert_eq!(console_log_level(true), log::Level::Debug);
        assert_eq!(console_log_level(false), log::Level::Info);
    }
}
