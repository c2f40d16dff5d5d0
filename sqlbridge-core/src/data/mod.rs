mod value;

pub use value::*;

pub use chrono;
pub use chrono_tz;
pub use rust_decimal;
pub use uuid;
