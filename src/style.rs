use console::style;

pub(crate) enum Style {
    Command, // env variable keys, flags and connection names
    Path,
    ErrorPrefix, // "error:" and "error[code]:" text
}

impl Style {
    pub(crate) fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Command => style(message_ref).yellow(),
            Style::Path => style(message_ref).bold(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
        }
        .to_string()
    }
}

pub(crate) fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("PRODUCTHUNT_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(_) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
