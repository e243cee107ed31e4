mod counts;
mod currency;
mod money;
mod tally;

pub use counts::*;
pub use currency::*;
pub use money::*;
pub use tally::*;
