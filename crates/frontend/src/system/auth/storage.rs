use web_sys::window;

const SESSION_USER_KEY: &str = "admin_session_user";

// sessionStorage: вход живёт до закрытия вкладки
fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn save_session(username: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(SESSION_USER_KEY, username);
    }
}

pub fn get_session() -> Option<String> {
    get_session_storage()?.get_item(SESSION_USER_KEY).ok()?
}

pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(SESSION_USER_KEY);
    }
}
