/// Fields of the hero booking widget. Captured only; nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub seats: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            date: String::new(),
            seats: 1,
        }
    }
}

impl BookingDraft {
    pub fn summary(&self) -> String {
        format!(
            "origem={:?} destino={:?} data={:?} lugares={}",
            self.origin, self.destination, self.date, self.seats
        )
    }
}

/// Coerces the free-text seat field. Minimum is 1; fractions truncate.
pub fn parse_seats(raw: &str) -> u32 {
    let Ok(n) = raw.trim().parse::<f64>() else {
        return 1;
    };
    if !n.is_finite() || n < 1.0 {
        return 1;
    }
    n.trunc().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_coercion() {
        assert_eq!(parse_seats("3"), 3);
        assert_eq!(parse_seats(" 12 "), 12);
        assert_eq!(parse_seats(""), 1);
        assert_eq!(parse_seats("três"), 1);
        assert_eq!(parse_seats("0"), 1);
        assert_eq!(parse_seats("-4"), 1);
        assert_eq!(parse_seats("2.7"), 2);
        assert_eq!(parse_seats("0.5"), 1);
        assert_eq!(parse_seats("NaN"), 1);
        assert_eq!(parse_seats("inf"), 1);
    }

    #[test]
    fn draft_starts_with_one_seat() {
        let d = BookingDraft::default();
        assert_eq!(d.seats, 1);
        assert!(d.origin.is_empty());
    }
}
