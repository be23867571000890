use serde::{Deserialize, Serialize};

/// Минимальная длина пароля при регистрации
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err("Username dan password harus diisi".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        rename = "fullName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
}

/// Состояние формы регистрации (до отправки)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("Semua field harus diisi".into());
        }
        if self.password != self.confirm_password {
            return Err("Password dan konfirmasi password tidak cocok".into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password harus minimal {} karakter",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: Some(self.email.trim().to_string()),
            full_name: Some(self.full_name.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            username: "budi".into(),
            full_name: "Budi Santoso".into(),
            email: "budi@example.com".into(),
            password: "rahasia".into(),
            confirm_password: "rahasia".into(),
        }
    }

    #[test]
    fn test_register_form_validation() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.email = " ".into();
        assert_eq!(form.validate().unwrap_err(), "Semua field harus diisi");

        let mut form = filled();
        form.confirm_password = "lain".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password dan konfirmasi password tidak cocok"
        );

        let mut form = filled();
        form.password = "12345".into();
        form.confirm_password = "12345".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password harus minimal 6 karakter"
        );
    }

    #[test]
    fn test_register_request_uses_camel_case_full_name() {
        let json = serde_json::to_value(filled().to_request()).unwrap();
        assert_eq!(json["fullName"], "Budi Santoso");
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_login_validation_and_response() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "".into(),
        };
        assert!(req.validate().is_err());

        let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert!(resp.message.is_none());
    }
}
