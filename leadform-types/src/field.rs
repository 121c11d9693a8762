use std::fmt;

/// One of the five questions of the lead wizard, in the order they are asked.
///
/// Each variant doubles as the step identifier and as the key for
/// validation errors, so lookups are exhaustive matches instead of
/// string-keyed property access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    City,
    Consent,
}

impl FieldId {
    /// All fields in wizard order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Email,
        FieldId::City,
        FieldId::Consent,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of this field in the wizard.
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Phone => 1,
            Self::Email => 2,
            Self::City => 3,
            Self::Consent => 4,
        }
    }

    /// Field at the given wizard position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step, `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, `None` on the first one.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether this is the final step (submitting happens here).
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::City => "city",
            Self::Consent => "consent",
        }
    }

    /// Question shown as the step title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Qual o seu nome?",
            Self::Phone => "Qual o seu telefone?",
            Self::Email => "Qual o seu e-mail?",
            Self::City => "De qual cidade você fala?",
            Self::Consent => "Autoriza contato da KlassVough?",
        }
    }

    /// Helper line shown under the question.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Name => "Coloque seu nome completo",
            Self::Phone => "Com DDD — se for Whats, melhor ainda",
            Self::Email => "Digite certinho pra não errar",
            Self::City => "Cidade/UF — ex.: São Paulo/SP",
            Self::Consent => "Último passo: sua autorização LGPD",
        }
    }

    /// Placeholder shown in an empty input. The consent step is a checkbox and has none.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Escreva sua resposta...",
            Self::Phone => "(11) 9 0000-0000",
            Self::Email => "voce@exemplo.com",
            Self::City => "São Paulo/SP",
            Self::Consent => "",
        }
    }

    /// Column name in the semicolon-delimited export.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Phone => "telefone",
            Self::Email => "email",
            Self::City => "cidade",
            Self::Consent => "consentimento",
        }
    }

    /// Label prefix in the plain-text export.
    pub fn text_label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Phone => "Telefone",
            Self::Email => "Email",
            Self::City => "Cidade",
            Self::Consent => "Consentimento",
        }
    }

    /// Whether the step collects free text (everything except consent).
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Consent)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let indices: Vec<usize> = FieldId::ALL.iter().map(|f| f.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(FieldId::from_index(2), Some(FieldId::Email));
        assert_eq!(FieldId::from_index(5), None);
    }

    #[test]
    fn next_and_prev_stop_at_the_ends() {
        assert_eq!(FieldId::Name.prev(), None);
        assert_eq!(FieldId::Name.next(), Some(FieldId::Phone));
        assert_eq!(FieldId::Consent.next(), None);
        assert_eq!(FieldId::Consent.prev(), Some(FieldId::City));
        assert!(FieldId::Consent.is_last());
        assert!(!FieldId::City.is_last());
    }

    #[test]
    fn consent_is_the_only_non_text_step() {
        let text: Vec<FieldId> = FieldId::ALL.into_iter().filter(|f| f.is_text()).collect();
        assert_eq!(text.len(), 4);
        assert_eq!(FieldId::Consent.placeholder(), "");
    }
}
