/// Figures shown on the profile page. Static showcase values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub sales: u32,
    pub rating: f32,
    pub works: u32,
    /// Whole rubles.
    pub earned: u64,
    pub monthly_growth_percent: i32,
    pub followers: u32,
    pub verified: bool,
}

impl ProfileStats {
    pub fn mock() -> Self {
        Self {
            sales: 127,
            rating: 4.8,
            works: 23,
            earned: 45_890,
            monthly_growth_percent: 34,
            followers: 892,
            verified: true,
        }
    }

    /// "4.8★"
    pub fn rating_label(&self) -> String {
        format!("{:.1}★", self.rating)
    }

    /// "+34%"
    pub fn growth_label(&self) -> String {
        format!("{:+}%", self.monthly_growth_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let p = ProfileStats::mock();
        assert_eq!(p.rating_label(), "4.8★");
        assert_eq!(p.growth_label(), "+34%");
        assert_eq!(crate::market::group_thousands(p.earned), "45 890");
    }
}
