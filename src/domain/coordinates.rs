#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Compares both components after rounding each to `precision` decimals. Two positions that only
    /// differ beyond that digit are the same place, anything else is not.
    pub fn matches(&self, other: &Coordinates, precision: usize) -> bool {
        round(self.latitude, precision) == round(other.latitude, precision)
            && round(self.longitude, precision) == round(other.longitude, precision)
    }
}

pub(crate) fn validate(latitude: f64, longitude: f64) -> Result<Coordinates, String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("invalid latitude: {}, must be between -90 and 90", latitude));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("invalid longitude: {}, must be between -180 and 180", longitude));
    }

    Ok(Coordinates { latitude, longitude })
}

fn round(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}
