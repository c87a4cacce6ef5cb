// Generic form-field checks: presence and text length.

/// Whether a form value counts as filled in.
pub trait Required {
    fn is_present(&self) -> bool;
}

impl Required for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Required for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T> Required for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Required for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Required> Required for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Required::is_present)
    }
}

impl<T: Required + ?Sized> Required for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($t:ty),*) => {
        $(impl Required for $t {
            fn is_present(&self) -> bool {
                true
            }
        })*
    };
}

always_present!(bool, char, f32, f64, i32, i64, u32, u64, usize, chrono::NaiveDate);

pub fn validate_required<T: Required + ?Sized>(value: &T) -> bool {
    value.is_present()
}

/// At least `min` characters.
pub fn validate_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// At most `max` characters.
pub fn validate_max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
