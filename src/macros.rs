#[macro_export] macro_rules! min {($first: expr $(, $other: expr)+ $(,)?) => {($first)$(.min($other))+};}
#[macro_export] macro_rules! max {($first: expr $(, $other: expr)+ $(,)?) => {($first)$(.max($other))+};}

/// Lowers `$place` to `$value` if smaller; evaluates to whether it changed.
#[macro_export]
macro_rules! chmin {
    ($place: expr, $value: expr $(,)?) => {{
        let value = $value;
        if value < $place { $place = value; true } else { false }
    }};
}

/// Raises `$place` to `$value` if larger; evaluates to whether it changed.
#[macro_export]
macro_rules! chmax {
    ($place: expr, $value: expr $(,)?) => {{
        let value = $value;
        if value > $place { $place = value; true } else { false }
    }};
}
