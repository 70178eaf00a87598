pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_size(size: usize) -> crate::Result<usize> {
        crate::verify_arg!(size, size > 0);
        Ok(size)
    }

    #[test]
    fn test_verify_arg_macro() {
        assert_eq!(check_size(3).unwrap(), 3);
        let err = check_size(0).unwrap_err();
        assert_eq!(
            err.into_kind(),
            ErrorKind::InvalidArgument {
                name: "size".into(),
                message: "size > 0".into()
            }
        );
    }
}
