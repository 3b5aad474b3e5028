//! `window.Telegram.WebApp` binding

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{HostBridge, HostError};

/// Handle on the Telegram WebApp object injected by the host
pub struct TelegramHost {
    web_app: JsValue,
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn bridge_err(e: JsValue) -> HostError {
    HostError::Bridge(format!("{:?}", e))
}

impl TelegramHost {
    /// Look up `window.Telegram.WebApp`, `None` outside Telegram
    pub fn detect() -> Option<Self> {
        let window: JsValue = web_sys::window()?.into();
        let web_app = get(&get(&window, "Telegram")?, "WebApp")?;
        Some(Self { web_app })
    }
}

impl HostBridge for TelegramHost {
    fn ready(&self) -> Result<(), HostError> {
        let ready: Function = get(&self.web_app, "ready")
            .ok_or_else(|| HostError::Bridge("WebApp.ready missing".into()))?
            .dyn_into()
            .map_err(bridge_err)?;
        ready.call0(&self.web_app).map_err(bridge_err)?;
        Ok(())
    }

    fn set_main_button_color(&self, color: &str) -> Result<(), HostError> {
        let button = get(&self.web_app, "MainButton")
            .ok_or_else(|| HostError::Bridge("WebApp.MainButton missing".into()))?;
        Reflect::set(&button, &JsValue::from_str("color"), &JsValue::from_str(color))
            .map_err(bridge_err)?;
        Ok(())
    }

    fn user_first_name(&self) -> Option<String> {
        let user = get(&get(&self.web_app, "initDataUnsafe")?, "user")?;
        get(&user, "first_name")?.as_string()
    }
}
