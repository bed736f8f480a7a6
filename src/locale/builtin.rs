//! Built-in locale data.

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Weekday names indexed 0 (Sunday) through 6 (Saturday).
    pub day_names: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::zh_cn()
    }
}

impl Locale {
    /// Simplified Chinese weekday names.
    pub fn zh_cn() -> Self {
        Locale {
            day_names: [
                "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
            ],
        }
    }

    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// Returns the weekday name for an index counted from Sunday.
    ///
    /// Indices wrap around, so 7 is Sunday again.
    pub fn day_name(&self, days_from_sunday: u32) -> &'static str {
        self.day_names[(days_from_sunday % 7) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        let locale = Locale::default();
        assert_eq!(locale.day_name(0), "星期日");
        assert_eq!(locale.day_name(6), "星期六");
    }

    #[test]
    fn test_day_name_wraps() {
        assert_eq!(Locale::en_us().day_name(7), "Sunday");
    }
}
