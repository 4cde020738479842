use serde::Deserialize;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// A bookable boat listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Offering {
    pub operator_name: String,
    pub title: String,
    /// 0..=5, display only
    pub rating: f32,
    /// Already formatted for display ("2.420,00"), never parsed.
    pub price: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Captain {
    pub name: String,
    pub experience: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Catalog {
    pub offerings: Vec<Offering>,
    #[serde(default)]
    pub captains: Vec<Captain>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("offering \"{title}\" has zero capacity")]
    ZeroCapacity { title: String },
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        if let Some(bad) = catalog.offerings.iter().find(|o| o.capacity == 0) {
            return Err(CatalogError::ZeroCapacity {
                title: bad.title.clone(),
            });
        }
        Ok(catalog)
    }

    /// The listings compiled into the page.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }
}

/// Capacity breakpoints offered in the listing's filter.
pub const CAPACITY_BREAKPOINTS: [u32; 4] = [6, 8, 10, 16];

/// Maximum-capacity filter. `Any` is what the integer sentinel 0 means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityFilter {
    #[default]
    Any,
    AtMost(i64),
}

impl CapacityFilter {
    pub fn from_threshold(threshold: i64) -> Self {
        if threshold == 0 {
            CapacityFilter::Any
        } else {
            CapacityFilter::AtMost(threshold)
        }
    }

    pub fn threshold(self) -> i64 {
        match self {
            CapacityFilter::Any => 0,
            CapacityFilter::AtMost(limit) => limit,
        }
    }

    /// Reads an `<option value>`; anything unparseable shows everything.
    pub fn from_select_value(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map(Self::from_threshold)
            .unwrap_or_default()
    }

    pub fn label(self) -> String {
        match self {
            CapacityFilter::Any => "Todas as capacidades".to_string(),
            CapacityFilter::AtMost(limit) => format!("Até {limit} pessoas"),
        }
    }

    /// Select options in display order.
    pub fn options() -> Vec<CapacityFilter> {
        std::iter::once(CapacityFilter::Any)
            .chain(
                CAPACITY_BREAKPOINTS
                    .iter()
                    .map(|&b| CapacityFilter::AtMost(i64::from(b))),
            )
            .collect()
    }

    pub fn admits(self, offering: &Offering) -> bool {
        match self {
            CapacityFilter::Any => true,
            CapacityFilter::AtMost(limit) => i64::from(offering.capacity) <= limit,
        }
    }

    pub fn apply(self, offerings: &[Offering]) -> Vec<&Offering> {
        offerings.iter().filter(|o| self.admits(o)).collect()
    }
}

/// Stable filter over `offerings`; a threshold of 0 returns them all.
pub fn filter(offerings: &[Offering], threshold: i64) -> Vec<Offering> {
    CapacityFilter::from_threshold(threshold)
        .apply(offerings)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat(title: &str, capacity: u32) -> Offering {
        Offering {
            operator_name: format!("Cap. {title}"),
            title: title.to_string(),
            rating: 4.5,
            price: "1.000,00".to_string(),
            capacity,
        }
    }

    fn fleet() -> Vec<Offering> {
        vec![boat("a", 8), boat("b", 10), boat("c", 6), boat("d", 16)]
    }

    fn capacities(list: &[Offering]) -> Vec<u32> {
        list.iter().map(|o| o.capacity).collect()
    }

    #[test]
    fn zero_threshold_is_identity() {
        let boats = fleet();
        assert_eq!(filter(&boats, 0), boats);
        assert_eq!(filter(&[], 0), Vec::<Offering>::new());
    }

    #[test]
    fn threshold_eight_keeps_eight_and_six_in_order() {
        let result = filter(&fleet(), 8);
        assert_eq!(capacities(&result), vec![8, 6]);
        assert_eq!(result[0].title, "a");
        assert_eq!(result[1].title, "c");
    }

    #[test]
    fn threshold_above_every_capacity_returns_all() {
        assert_eq!(filter(&fleet(), 20), fleet());
    }

    #[test]
    fn result_is_complete_and_ordered_for_every_breakpoint() {
        let boats = fleet();
        for t in 1..=20 {
            let result = filter(&boats, t);
            assert!(result.iter().all(|o| i64::from(o.capacity) <= t));
            let expected: Vec<Offering> = boats
                .iter()
                .filter(|o| i64::from(o.capacity) <= t)
                .cloned()
                .collect();
            assert_eq!(result, expected, "threshold {t}");
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let boats = fleet();
        for t in [0, 6, 8, 10, 16, 3] {
            let once = filter(&boats, t);
            assert_eq!(filter(&once, t), once);
        }
    }

    #[test]
    fn negative_and_tiny_thresholds_yield_empty() {
        assert!(filter(&fleet(), -1).is_empty());
        assert!(filter(&fleet(), 5).is_empty());
    }

    #[test]
    fn select_values_map_to_filters() {
        assert_eq!(CapacityFilter::from_select_value("0"), CapacityFilter::Any);
        assert_eq!(
            CapacityFilter::from_select_value("10"),
            CapacityFilter::AtMost(10)
        );
        assert_eq!(CapacityFilter::from_select_value("abc"), CapacityFilter::Any);
        assert_eq!(CapacityFilter::from_select_value(""), CapacityFilter::Any);
        assert_eq!(CapacityFilter::AtMost(16).threshold(), 16);
        assert_eq!(CapacityFilter::Any.threshold(), 0);
    }

    #[test]
    fn options_follow_breakpoints() {
        let labels: Vec<String> = CapacityFilter::options()
            .into_iter()
            .map(CapacityFilter::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Todas as capacidades",
                "Até 6 pessoas",
                "Até 8 pessoas",
                "Até 10 pessoas",
                "Até 16 pessoas"
            ]
        );
    }

    #[test]
    fn bundled_catalog_decodes() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        assert_eq!(capacities(&catalog.offerings), vec![8, 10, 6, 16]);
        assert_eq!(catalog.offerings[0].operator_name, "Cap. Nogueira");
        assert_eq!(catalog.offerings[3].price, "4.250,00");
        assert_eq!(catalog.captains.len(), 3);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let raw = r#"{"offerings":[{"operator_name":"x","title":"Bote","rating":3.0,"price":"1,00","capacity":0}]}"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::ZeroCapacity { title }) => assert_eq!(title, "Bote"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
