use crate::configuration::Configuration;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(about = "Classroom booking service")]
pub struct ConfigurationHandler {
    #[arg(long, default_value = "3000")]
    port: String,

    /// Opening hours per weekday, Monday through Sunday. Each entry is
    /// either "H:MM-H:MM" or "CLOSED".
    #[arg(
        long,
        value_delimiter = ',',
        default_values = [
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "10:00-20:00",
            "CLOSED",
        ]
    )]
    weekly_hours: Vec<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn weekly_hours(&self) -> [String; 7] {
        // clap enforces exactly 7 entries
        self.weekly_hours
            .clone()
            .try_into()
            .expect("weekly hours must have 7 entries")
    }
}
