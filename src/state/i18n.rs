//! Navigation Translations
//!
//! The `?lang=` query parameter selects the sidebar label language and the
//! document direction. Unknown codes fall back to English.

/// Supported interface languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    De,
    Es,
    Fr,
    Ar,
}

/// Sidebar label set for one language
pub struct NavLabels {
    pub accounts: &'static str,
    pub payments_wallet: &'static str,
    pub subscription: &'static str,
    pub transaction_history: &'static str,
    pub insight: &'static str,
    pub performance: &'static str,
    pub chart: &'static str,
    pub settings: &'static str,
    pub instructions: &'static str,
}

static EN: NavLabels = NavLabels {
    accounts: "Accounts",
    payments_wallet: "Payments & Wallet",
    subscription: "Subscription Plan",
    transaction_history: "Transaction History",
    insight: "Insight",
    performance: "Performance",
    chart: "Chart",
    settings: "Settings",
    instructions: "Instructions",
};

static DE: NavLabels = NavLabels {
    accounts: "Konten",
    payments_wallet: "Zahlungen & Wallet",
    subscription: "Abonnementplan",
    transaction_history: "Transaktionsverlauf",
    insight: "Einblicke",
    performance: "Leistung",
    chart: "Diagramm",
    settings: "Einstellungen",
    instructions: "Anleitung",
};

static ES: NavLabels = NavLabels {
    accounts: "Cuentas",
    payments_wallet: "Pagos & Cartera",
    subscription: "Plan de Suscripción",
    transaction_history: "Historial de Transacciones",
    insight: "Perspectiva",
    performance: "Rendimiento",
    chart: "Gráfico",
    settings: "Configuración",
    instructions: "Instrucciones",
};

static FR: NavLabels = NavLabels {
    accounts: "Comptes",
    payments_wallet: "Paiements & Portefeuille",
    subscription: "Plan d'abonnement",
    transaction_history: "Historique des transactions",
    insight: "Aperçu",
    performance: "Performance",
    chart: "Graphique",
    settings: "Paramètres",
    instructions: "Instructions",
};

static AR: NavLabels = NavLabels {
    accounts: "الحسابات",
    payments_wallet: "المدفوعات والمحفظة",
    subscription: "خطة الاشتراك",
    transaction_history: "سجل المعاملات",
    insight: "رؤى",
    performance: "الأداء",
    chart: "الرسم البياني",
    settings: "الإعدادات",
    instructions: "التعليمات",
};

impl Lang {
    pub const ALL: [Lang; 5] = [Lang::En, Lang::De, Lang::Es, Lang::Fr, Lang::Ar];

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::Ar => "ar",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::De => "Deutsch",
            Lang::Es => "Español",
            Lang::Fr => "Français",
            Lang::Ar => "العربية",
        }
    }

    /// Document direction: Arabic is right-to-left, everything else LTR.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            _ => "ltr",
        }
    }

    pub fn labels(&self) -> &'static NavLabels {
        match self {
            Lang::En => &EN,
            Lang::De => &DE,
            Lang::Es => &ES,
            Lang::Fr => &FR,
            Lang::Ar => &AR,
        }
    }
}

/// Parse the language out of a raw query string ("?lang=de&x=1").
/// Unknown or missing values fall back to English.
pub fn lang_from_query(search: &str) -> Lang {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("lang="))
        .and_then(Lang::from_code)
        .unwrap_or_default()
}

/// Language from the current page URL.
pub fn current_lang() -> Lang {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    lang_from_query(&search)
}

/// Set `dir` on the document element so Arabic renders right-to-left.
pub fn apply_direction(lang: Lang) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", lang.dir());
    }
}

/// Internal dashboard link carrying the language selection.
pub fn with_lang(path: &str, lang: Lang) -> String {
    format!("{}?lang={}", path, lang.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_query() {
        assert_eq!(lang_from_query("?lang=de"), Lang::De);
        assert_eq!(lang_from_query("?foo=1&lang=ar"), Lang::Ar);
        assert_eq!(lang_from_query("?lang=xx"), Lang::En);
        assert_eq!(lang_from_query(""), Lang::En);
        assert_eq!(lang_from_query("?language=de"), Lang::En);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Fr.dir(), "ltr");
    }

    #[test]
    fn test_labels_and_links() {
        assert_eq!(Lang::De.labels().accounts, "Konten");
        assert_eq!(Lang::Es.labels().performance, "Rendimiento");
        assert_eq!(with_lang("/dashboard/accounts", Lang::Fr), "/dashboard/accounts?lang=fr");
    }

    #[test]
    fn test_code_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }
}
