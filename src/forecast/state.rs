//! Running state carried between forecast months

/// State of the user base at a point in the forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastState {
    /// Current month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Active users at the end of the current month
    pub active_users: f64,
}

impl ForecastState {
    /// State before month 1
    pub fn starting(starting_users: f64) -> Self {
        Self {
            month: 0,
            active_users: starting_users,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Apply one month of growth and churn
    ///
    /// Both flows are taken from the same pre-update base. Returns
    /// `(new_users, churned_users)`.
    pub fn apply_flows(&mut self, growth_rate: f64, churn_rate: f64) -> (f64, f64) {
        let new_users = self.active_users * (growth_rate / 100.0);
        let churned_users = self.active_users * (churn_rate / 100.0);
        self.active_users = self.active_users + new_users - churned_users;
        (new_users, churned_users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flows_share_base() {
        let mut state = ForecastState::starting(100.0);
        state.advance_month();

        let (new_users, churned) = state.apply_flows(10.0, 5.0);
        assert_eq!(state.month, 1);
        assert_eq!(new_users, 10.0);
        assert_eq!(churned, 5.0);
        assert_eq!(state.active_users, 105.0);
    }

    #[test]
    fn test_overshooting_churn_goes_negative() {
        let mut state = ForecastState::starting(100.0);
        state.apply_flows(0.0, 150.0);
        assert_eq!(state.active_users, -50.0);
    }
}
