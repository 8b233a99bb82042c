// src/macros.rs

/// `s!()` → empty `String`; `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything `AsRef<str>` into a new `String`:
/// `join!(stem, ".", CSV_EXT)`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$(::core::convert::AsRef::<str>::as_ref(&$part)),+];
        parts.concat()
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_mixes_owned_and_borrowed() {
        let stem = s!("google-maps-data");
        assert_eq!(join!(stem, ".", "csv"), "google-maps-data.csv");
        assert_eq!(join!("only"), "only");
    }
}
