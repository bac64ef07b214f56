use chrono::NaiveTime;

/// Whole minutes needed to deliver `gross_liters` at `flow_rate_lpm`
pub fn duration_minutes(gross_liters: f64, flow_rate_lpm: f64) -> u32 {
    if flow_rate_lpm.is_nan() || flow_rate_lpm <= 0.0 {
        return 0;
    }
    let minutes = (gross_liters / flow_rate_lpm).floor();
    if minutes.is_nan() || minutes <= 0.0 {
        0
    } else if minutes >= u32::MAX as f64 {
        u32::MAX
    } else {
        minutes as u32
    }
}

/// Early morning start, earlier on hot days and later on cool ones
pub fn irrigation_time(temp_c: f64) -> NaiveTime {
    let hour = if temp_c > 35.0 {
        5
    } else if temp_c < 20.0 {
        7
    } else {
        6
    };
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn duration_is_floored() {
        assert_eq!(duration_minutes(127.78, 18.0), 7);
        assert_eq!(duration_minutes(49.9, 50.0), 0);
        assert_eq!(duration_minutes(400.0, 200.0), 2);
    }

    #[test]
    fn duration_never_negative() {
        assert_eq!(duration_minutes(-100.0, 18.0), 0);
        assert_eq!(duration_minutes(f64::NAN, 18.0), 0);
        assert_eq!(duration_minutes(100.0, 0.0), 0);
    }

    #[test]
    fn time_of_day_brackets() {
        assert_eq!(irrigation_time(38.0), at(5));
        assert_eq!(irrigation_time(35.0), at(6));
        assert_eq!(irrigation_time(25.0), at(6));
        assert_eq!(irrigation_time(20.0), at(6));
        assert_eq!(irrigation_time(19.9), at(7));
    }
}
