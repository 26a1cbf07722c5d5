use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;
use yew::Callback;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Punjabi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Punjabi => "pa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "pa" => Some(Language::Punjabi),
            _ => None,
        }
    }

    /// Name shown in the language picker, written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

const ENGLISH: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.features", "Features"),
    ("nav.testimonials", "Stories"),
    ("nav.faq", "FAQ"),
    ("nav.dashboard", "Dashboard"),
    ("nav.login", "Login"),
    ("nav.signup", "Sign Up"),
    ("nav.logout", "Logout"),
    ("nav.language", "Language"),
    ("hero.title", "Protect your money. Grow your knowledge."),
    ("hero.subtitle", "Sangrakshak helps you spot online fraud and build healthy money habits, in your own language."),
    ("hero.cta_primary", "Start Free Trial"),
    ("hero.cta_secondary", "Watch Videos"),
    ("features.title", "Everything you need to stay safe"),
    ("features.subtitle", "Cybersecurity and financial literacy in one place."),
    ("testimonials.title", "Trusted by learners across India"),
    ("faq.title", "Frequently Asked Questions"),
    ("video.title", "Learn in five minutes"),
    ("video.subtitle", "Short videos on the scams we see every day."),
    ("trial.title", "Start your 14-day free trial"),
    ("trial.body", "Full access to threat monitoring, lessons and progress tracking. No card required."),
    ("trial.start", "Create my account"),
    ("trial.close", "Maybe later"),
    ("auth.login_title", "Welcome back"),
    ("auth.signup_title", "Create your account"),
    ("auth.name", "Full name"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.submit_login", "Sign in"),
    ("auth.submit_signup", "Sign up"),
    ("auth.google", "Continue with Google"),
    ("auth.invalid", "Invalid email or password"),
    ("auth.loading", "Please wait..."),
    ("auth.no_account", "New here? Create an account"),
    ("auth.have_account", "Already registered? Sign in"),
    ("dashboard.welcome", "Welcome"),
    ("dashboard.threats", "Live threats"),
    ("dashboard.activity", "Recent activity"),
    ("dashboard.progress", "Learning progress"),
    ("dashboard.chart", "Threats blocked this week"),
    ("dashboard.tools_title", "Fraud awareness tools"),
    ("dashboard.tools_subtitle", "Tap a topic to see how the scam works and how to stay safe."),
    ("sidebar.overview", "Overview"),
    ("sidebar.tools", "Tools"),
    ("sidebar.admin", "Admin"),
    ("sidebar.collapse", "Collapse"),
    ("admin.title", "Admin console"),
    ("admin.users", "Seed accounts"),
    ("footer.rights", "All rights reserved."),
    ("notfound.title", "Page not found"),
];

const HINDI: &[(&str, &str)] = &[
    ("nav.home", "होम"),
    ("nav.features", "विशेषताएँ"),
    ("nav.testimonials", "कहानियाँ"),
    ("nav.faq", "सामान्य प्रश्न"),
    ("nav.dashboard", "डैशबोर्ड"),
    ("nav.login", "लॉग इन"),
    ("nav.signup", "साइन अप"),
    ("nav.logout", "लॉग आउट"),
    ("nav.language", "भाषा"),
    ("hero.title", "अपने पैसे की रक्षा करें। अपना ज्ञान बढ़ाएँ।"),
    ("hero.subtitle", "संरक्षक आपकी अपनी भाषा में ऑनलाइन धोखाधड़ी पहचानने और पैसे की अच्छी आदतें बनाने में मदद करता है।"),
    ("hero.cta_primary", "मुफ़्त ट्रायल शुरू करें"),
    ("hero.cta_secondary", "वीडियो देखें"),
    ("features.title", "सुरक्षित रहने के लिए सब कुछ"),
    ("features.subtitle", "साइबर सुरक्षा और वित्तीय साक्षरता एक ही जगह।"),
    ("testimonials.title", "पूरे भारत के शिक्षार्थियों का भरोसा"),
    ("faq.title", "अक्सर पूछे जाने वाले प्रश्न"),
    ("video.title", "पाँच मिनट में सीखें"),
    ("video.subtitle", "रोज़ होने वाली धोखाधड़ी पर छोटे वीडियो।"),
    ("trial.title", "अपना 14-दिन का मुफ़्त ट्रायल शुरू करें"),
    ("trial.body", "खतरा निगरानी, पाठ और प्रगति ट्रैकिंग तक पूरी पहुँच। कार्ड की ज़रूरत नहीं।"),
    ("trial.start", "मेरा खाता बनाएँ"),
    ("trial.close", "बाद में"),
    ("auth.login_title", "फिर से स्वागत है"),
    ("auth.signup_title", "अपना खाता बनाएँ"),
    ("auth.name", "पूरा नाम"),
    ("auth.email", "ईमेल"),
    ("auth.password", "पासवर्ड"),
    ("auth.submit_login", "साइन इन"),
    ("auth.submit_signup", "साइन अप"),
    ("auth.google", "Google से जारी रखें"),
    ("auth.invalid", "ईमेल या पासवर्ड गलत है"),
    ("auth.loading", "कृपया प्रतीक्षा करें..."),
    ("auth.no_account", "नए हैं? खाता बनाएँ"),
    ("auth.have_account", "पहले से पंजीकृत? साइन इन करें"),
    ("dashboard.welcome", "स्वागत है"),
    ("dashboard.threats", "लाइव खतरे"),
    ("dashboard.activity", "हाल की गतिविधि"),
    ("dashboard.progress", "सीखने की प्रगति"),
    ("dashboard.chart", "इस सप्ताह रोके गए खतरे"),
    ("dashboard.tools_title", "धोखाधड़ी जागरूकता उपकरण"),
    ("dashboard.tools_subtitle", "धोखाधड़ी कैसे होती है और कैसे बचें, यह देखने के लिए विषय चुनें।"),
    ("sidebar.overview", "अवलोकन"),
    ("sidebar.tools", "उपकरण"),
    ("sidebar.admin", "एडमिन"),
    ("sidebar.collapse", "छोटा करें"),
    ("admin.title", "एडमिन कंसोल"),
    ("admin.users", "डेमो खाते"),
    ("footer.rights", "सर्वाधिकार सुरक्षित।"),
    ("notfound.title", "पृष्ठ नहीं मिला"),
];

const PUNJABI: &[(&str, &str)] = &[
    ("nav.home", "ਹੋਮ"),
    ("nav.features", "ਵਿਸ਼ੇਸ਼ਤਾਵਾਂ"),
    ("nav.testimonials", "ਕਹਾਣੀਆਂ"),
    ("nav.faq", "ਆਮ ਸਵਾਲ"),
    ("nav.dashboard", "ਡੈਸ਼ਬੋਰਡ"),
    ("nav.login", "ਲੌਗ ਇਨ"),
    ("nav.signup", "ਸਾਈਨ ਅੱਪ"),
    ("nav.logout", "ਲੌਗ ਆਊਟ"),
    ("nav.language", "ਭਾਸ਼ਾ"),
    ("hero.title", "ਆਪਣੇ ਪੈਸੇ ਦੀ ਰੱਖਿਆ ਕਰੋ। ਆਪਣਾ ਗਿਆਨ ਵਧਾਓ।"),
    ("hero.subtitle", "ਸੰਰੱਖਿਅਕ ਤੁਹਾਡੀ ਆਪਣੀ ਭਾਸ਼ਾ ਵਿੱਚ ਔਨਲਾਈਨ ਧੋਖਾਧੜੀ ਪਛਾਣਨ ਅਤੇ ਪੈਸੇ ਦੀਆਂ ਚੰਗੀਆਂ ਆਦਤਾਂ ਬਣਾਉਣ ਵਿੱਚ ਮਦਦ ਕਰਦਾ ਹੈ।"),
    ("hero.cta_primary", "ਮੁਫ਼ਤ ਟ੍ਰਾਇਲ ਸ਼ੁਰੂ ਕਰੋ"),
    ("hero.cta_secondary", "ਵੀਡੀਓ ਦੇਖੋ"),
    ("features.title", "ਸੁਰੱਖਿਅਤ ਰਹਿਣ ਲਈ ਸਭ ਕੁਝ"),
    ("features.subtitle", "ਸਾਈਬਰ ਸੁਰੱਖਿਆ ਅਤੇ ਵਿੱਤੀ ਸਾਖਰਤਾ ਇੱਕੋ ਥਾਂ।"),
    ("testimonials.title", "ਪੂਰੇ ਭਾਰਤ ਦੇ ਸਿਖਿਆਰਥੀਆਂ ਦਾ ਭਰੋਸਾ"),
    ("faq.title", "ਅਕਸਰ ਪੁੱਛੇ ਜਾਣ ਵਾਲੇ ਸਵਾਲ"),
    ("video.title", "ਪੰਜ ਮਿੰਟਾਂ ਵਿੱਚ ਸਿੱਖੋ"),
    ("video.subtitle", "ਰੋਜ਼ਾਨਾ ਹੋਣ ਵਾਲੀ ਧੋਖਾਧੜੀ ਬਾਰੇ ਛੋਟੇ ਵੀਡੀਓ।"),
    ("trial.title", "ਆਪਣਾ 14-ਦਿਨਾਂ ਦਾ ਮੁਫ਼ਤ ਟ੍ਰਾਇਲ ਸ਼ੁਰੂ ਕਰੋ"),
    ("trial.body", "ਖ਼ਤਰਾ ਨਿਗਰਾਨੀ, ਪਾਠਾਂ ਅਤੇ ਤਰੱਕੀ ਟ੍ਰੈਕਿੰਗ ਤੱਕ ਪੂਰੀ ਪਹੁੰਚ। ਕਾਰਡ ਦੀ ਲੋੜ ਨਹੀਂ।"),
    ("trial.start", "ਮੇਰਾ ਖਾਤਾ ਬਣਾਓ"),
    ("trial.close", "ਬਾਅਦ ਵਿੱਚ"),
    ("auth.login_title", "ਮੁੜ ਜੀ ਆਇਆਂ ਨੂੰ"),
    ("auth.signup_title", "ਆਪਣਾ ਖਾਤਾ ਬਣਾਓ"),
    ("auth.name", "ਪੂਰਾ ਨਾਮ"),
    ("auth.email", "ਈਮੇਲ"),
    ("auth.password", "ਪਾਸਵਰਡ"),
    ("auth.submit_login", "ਸਾਈਨ ਇਨ"),
    ("auth.submit_signup", "ਸਾਈਨ ਅੱਪ"),
    ("auth.google", "Google ਨਾਲ ਜਾਰੀ ਰੱਖੋ"),
    ("auth.invalid", "ਈਮੇਲ ਜਾਂ ਪਾਸਵਰਡ ਗਲਤ ਹੈ"),
    ("auth.loading", "ਕਿਰਪਾ ਕਰਕੇ ਉਡੀਕ ਕਰੋ..."),
    ("auth.no_account", "ਨਵੇਂ ਹੋ? ਖਾਤਾ ਬਣਾਓ"),
    ("auth.have_account", "ਪਹਿਲਾਂ ਤੋਂ ਰਜਿਸਟਰਡ? ਸਾਈਨ ਇਨ ਕਰੋ"),
    ("dashboard.welcome", "ਜੀ ਆਇਆਂ ਨੂੰ"),
    ("dashboard.threats", "ਲਾਈਵ ਖ਼ਤਰੇ"),
    ("dashboard.activity", "ਹਾਲੀਆ ਗਤੀਵਿਧੀ"),
    ("dashboard.progress", "ਸਿੱਖਣ ਦੀ ਤਰੱਕੀ"),
    ("dashboard.chart", "ਇਸ ਹਫ਼ਤੇ ਰੋਕੇ ਗਏ ਖ਼ਤਰੇ"),
    ("dashboard.tools_title", "ਧੋਖਾਧੜੀ ਜਾਗਰੂਕਤਾ ਸਾਧਨ"),
    ("dashboard.tools_subtitle", "ਧੋਖਾਧੜੀ ਕਿਵੇਂ ਹੁੰਦੀ ਹੈ ਅਤੇ ਕਿਵੇਂ ਬਚਣਾ ਹੈ, ਇਹ ਦੇਖਣ ਲਈ ਵਿਸ਼ਾ ਚੁਣੋ।"),
    ("sidebar.overview", "ਸੰਖੇਪ"),
    ("sidebar.tools", "ਸਾਧਨ"),
    ("sidebar.admin", "ਐਡਮਿਨ"),
    ("sidebar.collapse", "ਛੋਟਾ ਕਰੋ"),
    ("admin.title", "ਐਡਮਿਨ ਕੰਸੋਲ"),
    ("admin.users", "ਡੈਮੋ ਖਾਤੇ"),
    ("footer.rights", "ਸਾਰੇ ਹੱਕ ਰਾਖਵੇਂ ਹਨ।"),
    ("notfound.title", "ਪੰਨਾ ਨਹੀਂ ਮਿਲਿਆ"),
];

static TRANSLATIONS: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(Language::English, ENGLISH.iter().copied().collect());
    map.insert(Language::Hindi, HINDI.iter().copied().collect());
    map.insert(Language::Punjabi, PUNJABI.iter().copied().collect());
    map
});

/// Looks up `key` for `language`. Missing keys come back unchanged so a
/// gap in a table never breaks rendering.
pub fn translate(language: Language, key: &str) -> String {
    match TRANSLATIONS.get(&language).and_then(|table| table.get(key)) {
        Some(text) => text.to_string(),
        None => {
            warn!("Missing translation for '{}' ({})", key, language.code());
            key.to_string()
        }
    }
}

/// Current language plus the way to change it. Owned by `App`, handed to
/// pages as a prop.
#[derive(Clone, PartialEq)]
pub struct Localizer {
    language: Language,
    on_change: Callback<Language>,
}

impl Localizer {
    pub fn new(language: Language, on_change: Callback<Language>) -> Self {
        Self { language, on_change }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.language, key)
    }

    /// Switches language by code. Unknown codes leave the selection as is.
    pub fn set_language(&self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.on_change.emit(language),
            None => warn!("Ignoring unknown language code '{}'", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    // Records land in the calling thread's buffer, so parallel tests stay apart.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|captured| {
                captured
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
        CAPTURED.with(|captured| captured.borrow_mut().clear());
        let result = f();
        let records = CAPTURED.with(|captured| captured.borrow_mut().drain(..).collect());
        (result, records)
    }

    #[test]
    fn test_translates_nav_home() {
        assert_eq!(translate(Language::English, "nav.home"), "Home");
        assert_eq!(translate(Language::Hindi, "nav.home"), "होम");
        assert_eq!(translate(Language::Punjabi, "nav.home"), "ਹੋਮ");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(translate(Language::English, "nav.missing"), "nav.missing");
        assert_eq!(translate(Language::Hindi, "nav.missing"), "nav.missing");
    }

    #[test]
    fn test_missing_key_logs_warning() {
        let (text, records) = capture_logs(|| translate(Language::Punjabi, "nav.missing"));
        assert_eq!(text, "nav.missing");
        let warnings: Vec<_> = records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.contains("nav.missing"));
        assert!(warnings[0].1.contains("pa"));
    }

    #[test]
    fn test_known_key_logs_nothing() {
        let (text, records) = capture_logs(|| translate(Language::English, "nav.home"));
        assert_eq!(text, "Home");
        assert!(records.iter().all(|(level, _)| *level != Level::Warn));
    }

    #[test]
    fn test_tables_cover_english_keys() {
        let english = &TRANSLATIONS[&Language::English];
        for language in [Language::Hindi, Language::Punjabi] {
            let table = &TRANSLATIONS[&language];
            for key in english.keys() {
                assert!(table.contains_key(key), "{} missing {}", language.code(), key);
            }
            assert_eq!(table.len(), english.len());
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("HI"), Some(Language::Hindi));
        assert_eq!(Language::from_code(" pa "), Some(Language::Punjabi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::English);
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_localizer_set_language() {
        let picked = Rc::new(Cell::new(None));
        let on_change = {
            let picked = picked.clone();
            Callback::from(move |language: Language| picked.set(Some(language)))
        };
        let localizer = Localizer::new(Language::English, on_change);
        assert_eq!(localizer.t("nav.login"), "Login");

        localizer.set_language("xx");
        assert_eq!(picked.get(), None);
        localizer.set_language("pa");
        assert_eq!(picked.get(), Some(Language::Punjabi));
    }
}
