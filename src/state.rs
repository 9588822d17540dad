use crate::dto::NewIncident;

/// How long a success banner stays visible.
pub const STATUS_CLEAR_MS: u64 = 3000;

pub const SUBMIT_SUCCESS: &str = "Incidente registrado com sucesso!";
pub const SUBMIT_FAILURE: &str = "Erro ao salvar. Verifique se o backend está rodando.";

/// Banners are classified by this marker word alone.
pub const ERROR_MARKER: &str = "Erro";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

pub fn classify(message: &str) -> MessageKind {
    if message.contains(ERROR_MARKER) {
        MessageKind::Error
    } else {
        MessageKind::Success
    }
}

/// Only success banners are cleared on a timer; error banners stay until the
/// next submission replaces them.
pub fn auto_clears(message: &str) -> bool {
    classify(message) == MessageKind::Success
}

pub fn submit_message<T>(outcome: &Result<T, String>) -> &'static str {
    match outcome {
        Ok(_) => SUBMIT_SUCCESS,
        Err(_) => SUBMIT_FAILURE,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub location: String,
    pub description: String,
}

impl Draft {
    pub fn to_request(&self) -> NewIncident {
        NewIncident {
            title: self.title.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_banner_auto_clears() {
        let outcome: Result<(), String> = Ok(());
        let message = submit_message(&outcome);
        assert_eq!(message, SUBMIT_SUCCESS);
        assert_eq!(classify(message), MessageKind::Success);
        assert!(auto_clears(message));
        assert_eq!(STATUS_CLEAR_MS, 3000);
    }

    #[test]
    fn failure_banner_carries_marker_and_never_auto_clears() {
        let outcome: Result<(), String> = Err("fetch failed".into());
        let message = submit_message(&outcome);
        assert_eq!(message, SUBMIT_FAILURE);
        assert!(message.contains(ERROR_MARKER));
        assert_eq!(classify(message), MessageKind::Error);
        assert!(!auto_clears(message));
    }

    #[test]
    fn draft_maps_into_creation_payload() {
        let draft = Draft {
            title: "Queda de material".into(),
            location: "Setor de Cargas".into(),
            description: "desc".into(),
        };

        let request = draft.to_request();
        assert_eq!(request.title, draft.title);
        assert_eq!(request.location, draft.location);
        assert_eq!(request.description, draft.description);
    }

    // Field presence is the browser's `required` check; no client-side
    // validation sits between the form and the POST.
    #[test]
    fn whitespace_draft_still_builds_payload() {
        let draft = Draft {
            title: " ".into(),
            location: " ".into(),
            description: " ".into(),
        };

        let request = draft.to_request();
        assert_eq!(request.title, " ");
        assert_eq!(request.location, " ");
        assert_eq!(request.description, " ");
    }

    #[test]
    fn failed_submission_leaves_draft_intact() {
        let draft = Draft {
            title: "Queda de material".into(),
            location: "Setor de Cargas".into(),
            description: "desc".into(),
        };
        let outcome: Result<(), String> = Err("backend down".into());

        // The view only resets the draft on Ok.
        let after = if outcome.is_ok() {
            Draft::default()
        } else {
            draft.clone()
        };
        assert_eq!(after, draft);
    }
}
