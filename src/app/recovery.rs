#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("unknown feature") {
        suggestions.push("Pick a target from the feature list (j/k, then Enter)".to_string());
    }

    if msg_lower.contains("config syntax") {
        suggestions.push("Check the TOML syntax of ~/.config/atinto/config.toml".to_string());
    }

    if msg_lower.contains("duplicate command trigger") {
        suggestions.push("Remove the repeated trigger from [[commands]]".to_string());
    }

    if msg_lower.contains("exactly one of `reply` or `effect`") {
        suggestions.push("Give each [[commands]] entry either reply = \"...\" or effect = \"reset\"".to_string());
    }

    if msg_lower.contains("latitude") || msg_lower.contains("longitude") {
        suggestions
            .push("Latitude must be within [-90, 90] and longitude within [-180, 180]".to_string());
    }

    if msg_lower.contains("duplicate feature id") {
        suggestions.push("Give every [[features]] entry a unique id".to_string());
    }

    if msg_lower.contains("key binding") {
        suggestions.push("Bindings look like \"L\" = \"legend\" under [keys.custom]".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("unknown feature id: 'Atlantis'");
        assert!(s.contains(&"Pick a target from the feature list (j/k, then Enter)".to_string()));

        let s = get_suggestions("invalid feature 'x': latitude 95 is outside [-90, 90]");
        assert_eq!(s.len(), 1);

        let s = get_suggestions("invalid command table: duplicate command trigger: 'ping'");
        assert!(s.contains(&"Remove the repeated trigger from [[commands]]".to_string()));

        assert!(get_suggestions("all quiet").is_empty());
    }
}
