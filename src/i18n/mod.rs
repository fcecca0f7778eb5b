//! Locale-keyed message table.
//!
//! All user-facing strings live here, looked up by (key, locale). The
//! engines themselves never embed display text; they return keys or typed
//! violations and let callers render them for the active locale.

use crate::domain::Locale;
use crate::forms::RuleViolation;

/// Keys for fixed user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// A required field was left empty
    RequiredField,

    /// Email field failed the shape check
    InvalidEmail,

    /// Name field contained something other than letters and spaces
    NameLettersOnly,

    /// Contact form submission accepted by the transport
    SubmitSuccess,

    /// Contact form submission rejected or transport failed
    SubmitError,

    /// Submission in flight
    Sending,

    /// Newsletter subscription accepted
    NewsletterSuccess,

    /// Newsletter email rejected before submission
    NewsletterInvalidEmail,

    /// Link copied to the clipboard (share fallback)
    LinkCopied,

    /// Link delivered through the native share target
    LinkShared,

    /// Neither share target nor clipboard was available
    ShareFailed,

    /// Search ran and matched nothing
    NoResults,

    /// Pagination in flight
    LoadingMore,

    /// Pagination exhausted the archive
    AllLoaded,
}

/// Look up a fixed message for a locale
pub fn message(key: MessageKey, locale: Locale) -> &'static str {
    use MessageKey::*;

    match (key, locale) {
        (RequiredField, Locale::PtBr) => "Este campo é obrigatório",
        (RequiredField, Locale::En) => "This field is required",

        (InvalidEmail, Locale::PtBr) => "Digite um e-mail válido",
        (InvalidEmail, Locale::En) => "Enter a valid email",

        (NameLettersOnly, Locale::PtBr) => "Nome deve conter apenas letras",
        (NameLettersOnly, Locale::En) => "Name should contain only letters",

        (SubmitSuccess, Locale::PtBr) => {
            "Mensagem enviada com sucesso! Entraremos em contato em até 24 horas."
        }
        (SubmitSuccess, Locale::En) => {
            "Message sent successfully! We will contact you within 24 hours."
        }

        (SubmitError, Locale::PtBr) => {
            "Erro ao enviar mensagem. Tente novamente ou entre em contato por e-mail."
        }
        (SubmitError, Locale::En) => {
            "Error sending message. Please try again or contact us by email."
        }

        (Sending, Locale::PtBr) => "Enviando...",
        (Sending, Locale::En) => "Sending...",

        (NewsletterSuccess, Locale::PtBr) => "Obrigado! Você foi inscrito com sucesso.",
        (NewsletterSuccess, Locale::En) => "Thank you! You have been successfully subscribed.",

        (NewsletterInvalidEmail, Locale::PtBr) => "Por favor, insira um e-mail válido.",
        (NewsletterInvalidEmail, Locale::En) => "Please enter a valid email address.",

        (LinkCopied, Locale::PtBr) => "Link copiado para a área de transferência!",
        (LinkCopied, Locale::En) => "Link copied to clipboard!",

        (LinkShared, Locale::PtBr) => "Link compartilhado!",
        (LinkShared, Locale::En) => "Link shared!",

        (ShareFailed, Locale::PtBr) => "Não foi possível compartilhar o link.",
        (ShareFailed, Locale::En) => "Could not share the link.",

        (NoResults, Locale::PtBr) => "Nenhum resultado encontrado",
        (NoResults, Locale::En) => "No results found",

        (LoadingMore, Locale::PtBr) => "Carregando...",
        (LoadingMore, Locale::En) => "Loading...",

        (AllLoaded, Locale::PtBr) => "Todos os artigos foram carregados!",
        (AllLoaded, Locale::En) => "All articles have been loaded!",
    }
}

/// "No results found for \"query\"" message for the search panel
pub fn no_results_for(query: &str, locale: Locale) -> String {
    match locale {
        Locale::PtBr => format!("Nenhum resultado encontrado para \"{}\"", query),
        Locale::En => format!("No results found for \"{}\"", query),
    }
}

/// Render a validation rule violation for a locale
pub fn violation_message(violation: &RuleViolation, locale: Locale) -> String {
    match violation {
        RuleViolation::Required => message(MessageKey::RequiredField, locale).to_string(),
        RuleViolation::InvalidEmail => message(MessageKey::InvalidEmail, locale).to_string(),
        RuleViolation::InvalidName => message(MessageKey::NameLettersOnly, locale).to_string(),
        RuleViolation::TooShort { min } => match locale {
            Locale::PtBr => format!("Mensagem deve ter pelo menos {} caracteres", min),
            Locale::En => format!("Message should have at least {} characters", min),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_locales() {
        let keys = [
            MessageKey::RequiredField,
            MessageKey::InvalidEmail,
            MessageKey::NameLettersOnly,
            MessageKey::SubmitSuccess,
            MessageKey::SubmitError,
            MessageKey::Sending,
            MessageKey::NewsletterSuccess,
            MessageKey::NewsletterInvalidEmail,
            MessageKey::LinkCopied,
            MessageKey::LinkShared,
            MessageKey::ShareFailed,
            MessageKey::NoResults,
            MessageKey::LoadingMore,
            MessageKey::AllLoaded,
        ];

        for key in keys {
            assert!(!message(key, Locale::PtBr).is_empty());
            assert!(!message(key, Locale::En).is_empty());
            // The two locales must actually differ; a shared string usually
            // means a copy-paste slip in the table.
            assert_ne!(message(key, Locale::PtBr), message(key, Locale::En));
        }
    }

    #[test]
    fn test_no_results_embeds_query() {
        let msg = no_results_for("scrum", Locale::En);
        assert_eq!(msg, "No results found for \"scrum\"");

        let msg = no_results_for("scrum", Locale::PtBr);
        assert!(msg.contains("\"scrum\""));
    }

    #[test]
    fn test_min_length_message_embeds_limit() {
        let msg = violation_message(&RuleViolation::TooShort { min: 10 }, Locale::En);
        assert_eq!(msg, "Message should have at least 10 characters");
    }
}
