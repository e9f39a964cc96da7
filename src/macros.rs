// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression (literal, const or var)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! list {
    // Vec<String> shorthand for list-typed item fields.
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$(::std::string::String::from($item)),+]
    };
}
