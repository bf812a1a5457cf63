#[macro_export]
macro_rules! print_to {
    ($dst:expr, $fmt:expr) => {{
        $dst.write_fmt(format_args!($fmt))?;
    }};
    ($dst:expr, $fmt:expr, $($args:tt)*) => {{
        $dst.write_fmt(format_args!($fmt, $($args)*))?;
    }};
}
