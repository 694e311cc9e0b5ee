pub mod sanitize;
pub use sanitize::{DesiredType, FilterErrorNot, Sanitize};

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub mod terminal;
        pub use terminal::Terminal;
    }
}
