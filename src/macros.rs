// src/macros.rs

/// String shorthand: `s!()` is `String::new()`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `label!(key => value)` builds a [`Label`](crate::model::Label).
#[macro_export]
macro_rules! label {
    ($key:expr => $value:expr) => {
        $crate::model::Label::new($key, $value)
    };
}
