//! Rendering of instance listings.

mod size;
mod table;

use crate::config::Settings;
use crate::instance::{total_size, Instance};
use chrono::{DateTime, Local};
use std::time::SystemTime;

pub use size::format_size;
pub use table::Table;

/// Column titles of the instance table.
pub const TABLE_HEADER: [&str; 4] = ["Port", "Created at", "Size", "URL"];

/// Format a timestamp in local time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(ts: SystemTime) -> String {
    let dt: DateTime<Local> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render instances as a table with a total-size footer.
///
/// Rows are emitted in the order given.
///
/// # Examples
///
/// ```
/// use epghelper::output::render_instance_table;
/// use epghelper::{Instance, Settings};
/// use std::time::SystemTime;
///
/// let settings = Settings::with_base_dir("/tmp/pg");
/// let instances = vec![Instance::new("5432", SystemTime::now(), "/tmp/pg/5432", 2048)];
///
/// let rendered = render_instance_table(&instances, &settings);
/// assert!(rendered.contains("5432"));
/// assert!(rendered.contains("2.0 KB"));
/// ```
#[must_use]
pub fn render_instance_table(instances: &[Instance], settings: &Settings) -> String {
    let mut table = Table::new(TABLE_HEADER);
    for instance in instances {
        table.push_row([
            instance.port().to_string(),
            format_timestamp(instance.created()),
            format_size(instance.size()),
            instance.url(settings),
        ]);
    }
    table.set_footer([
        String::new(),
        "Total".to_string(),
        format_size(total_size(instances)),
    ]);
    table.render()
}
