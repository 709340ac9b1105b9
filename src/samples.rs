//! Bundled sample datasets backing the demo charts.
//!
//! Each function returns a ready canonical [`DataSet`]; hosts swap it out
//! wholesale once real input arrives.

use crate::core::{DataSet, Record};

/// Federal revenue by tax type per year, in billions, for the animated donut.
#[must_use]
pub fn revenue_by_tax_type() -> DataSet {
    DataSet::from_records(vec![
        Record::new("2022", "Payroll Taxes", 1400.0),
        Record::new("2022", "Individual Income Taxes", 2300.0),
        Record::new("2022", "Corporate Taxes", 500.0),
        Record::new("2022", "Other Taxes", 280.0),
        Record::new("2023", "Payroll Taxes", 1450.0),
        Record::new("2023", "Individual Income Taxes", 2400.0),
        Record::new("2023", "Corporate Taxes", 520.0),
        Record::new("2023", "Other Taxes", 300.0),
        Record::new("2024", "Payroll Taxes", 1500.0),
        Record::new("2024", "Individual Income Taxes", 2500.0),
        Record::new("2024", "Corporate Taxes", 550.0),
        Record::new("2024", "Other Taxes", 310.0),
    ])
}

/// Streaming-category popularity per month for the bar race.
#[must_use]
pub fn category_popularity() -> DataSet {
    DataSet::from_records(vec![
        Record::new("2024-01", "Cozy Anime", 180.0),
        Record::new("2024-01", "Stand-up Comedy", 140.0),
        Record::new("2024-01", "DIY Shorts", 120.0),
        Record::new("2024-01", "Food Vlogs", 110.0),
        Record::new("2024-01", "True Crime", 90.0),
        Record::new("2024-02", "Cozy Anime", 195.0),
        Record::new("2024-02", "Stand-up Comedy", 150.0),
        Record::new("2024-02", "DIY Shorts", 130.0),
        Record::new("2024-02", "Food Vlogs", 125.0),
        Record::new("2024-02", "True Crime", 100.0),
        Record::new("2024-03", "Cozy Anime", 200.0),
        Record::new("2024-03", "Stand-up Comedy", 165.0),
        Record::new("2024-03", "DIY Shorts", 150.0),
        Record::new("2024-03", "Food Vlogs", 140.0),
        Record::new("2024-03", "True Crime", 105.0),
        Record::new("2024-04", "Cozy Anime", 210.0),
        Record::new("2024-04", "Stand-up Comedy", 170.0),
        Record::new("2024-04", "DIY Shorts", 160.0),
        Record::new("2024-04", "Food Vlogs", 150.0),
        Record::new("2024-04", "True Crime", 110.0),
    ])
}

/// Median household income per US state for the animated choropleth.
#[must_use]
pub fn median_income_by_state() -> DataSet {
    DataSet::from_records(vec![
        Record::new("2021", "CA", 72000.0),
        Record::new("2021", "TX", 60000.0),
        Record::new("2021", "NY", 68000.0),
        Record::new("2021", "FL", 56000.0),
        Record::new("2021", "WA", 70000.0),
        Record::new("2022", "CA", 74000.0),
        Record::new("2022", "TX", 62000.0),
        Record::new("2022", "NY", 69500.0),
        Record::new("2022", "FL", 57500.0),
        Record::new("2022", "WA", 71500.0),
        Record::new("2023", "CA", 76000.0),
        Record::new("2023", "TX", 63500.0),
        Record::new("2023", "NY", 71000.0),
        Record::new("2023", "FL", 59000.0),
        Record::new("2023", "WA", 73000.0),
        Record::new("2024", "CA", 78000.0),
        Record::new("2024", "TX", 65000.0),
        Record::new("2024", "NY", 72500.0),
        Record::new("2024", "FL", 60500.0),
        Record::new("2024", "WA", 74500.0),
    ])
}
