// License: MIT

use crate::error::StrataError;
use crate::value::Value;

impl TryFrom<Value> for String {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            _ => Err(StrataError::TypeError {
                message: format!("Expected string, got {:?}", value),
                hint: Some("Use a string value in your config".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(x) => Ok(x),
            Value::Int(n) => Ok(n as f64),
            _ => Err(StrataError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|x| x as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            _ => Err(StrataError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use an integer value in your config".into()),
                code: Some(403),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        i32::try_from(n).map_err(|_| StrataError::TypeError {
            message: format!("Number {} out of range for i32", n),
            hint: Some("Use a number between -2147483648 and 2147483647".into()),
            code: Some(404),
        })
    }
}

impl TryFrom<Value> for u16 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u16::try_from(n).map_err(|_| StrataError::TypeError {
            message: format!("Number {} out of range for u16", n),
            hint: Some("Use a number between 0 and 65535".into()),
            code: Some(405),
        })
    }
}

impl TryFrom<Value> for u32 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n).map_err(|_| StrataError::TypeError {
            message: format!("Number {} out of range for u32", n),
            hint: Some("Use a number between 0 and 4294967295".into()),
            code: Some(406),
        })
    }
}

impl TryFrom<Value> for u64 {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u64::try_from(n).map_err(|_| StrataError::TypeError {
            message: format!("Number {} out of range for u64", n),
            hint: Some("Use a positive number".into()),
            code: Some(407),
        })
    }
}

impl TryFrom<Value> for usize {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        usize::try_from(n).map_err(|_| StrataError::TypeError {
            message: format!("Number {} out of range for usize", n),
            hint: Some("Use a positive integer".into()),
            code: Some(408),
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = StrataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::Str(ref s)
                if s.to_lowercase().starts_with("tru") || s.to_lowercase().starts_with("fal") =>
            {
                Err(StrataError::TypeError {
                    message: format!("Invalid boolean value '{}'. Did you mean 'true' or 'false'?", s),
                    hint: None,
                    code: Some(409),
                })
            }
            _ => Err(StrataError::TypeError {
                message: format!("Expected boolean, got {:?}", value),
                hint: None,
                code: Some(409),
            }),
        }
    }
}
