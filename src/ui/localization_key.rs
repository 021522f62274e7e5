//! Localization keys for UI elements

/// Localization keys for UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationKey {
    // Title block
    Title,
    AvailableLanguages,
    // Language table columns
    ColumnCode,
    ColumnLanguage,
    ColumnPage,
    // Detection notice
    DetectedLanguage,
    Countdown,
    CancelHint,
    // Terminal states
    ManualChoice,
    Redirecting,
    PreferenceSaved,
    // Console input
    UnknownCommand,
}

impl LocalizationKey {
    pub fn get_english(&self) -> &'static str {
        match self {
            LocalizationKey::Title => "CIVIL RESISTANCE GUIDE",
            LocalizationKey::AvailableLanguages => "Available languages",
            LocalizationKey::ColumnCode => "Code",
            LocalizationKey::ColumnLanguage => "Language",
            LocalizationKey::ColumnPage => "Page",
            LocalizationKey::DetectedLanguage => "🌐 Detected language: {}",
            LocalizationKey::Countdown => "Redirecting in {} s",
            LocalizationKey::CancelHint => "Type 'c' to stay here, or en / uk / fa to choose a language",
            LocalizationKey::ManualChoice => "Choose your language:",
            LocalizationKey::Redirecting => "➜ Opening {}",
            LocalizationKey::PreferenceSaved => "✓ Preferred language saved: {}",
            LocalizationKey::UnknownCommand => "Unknown command: {}",
        }
    }

    pub fn get_ukrainian(&self) -> &'static str {
        match self {
            LocalizationKey::Title => "ПОСІБНИК З ГРОМАДЯНСЬКОГО СПРОТИВУ",
            LocalizationKey::AvailableLanguages => "Доступні мови",
            LocalizationKey::ColumnCode => "Код",
            LocalizationKey::ColumnLanguage => "Мова",
            LocalizationKey::ColumnPage => "Сторінка",
            LocalizationKey::DetectedLanguage => "🌐 Виявлена мова: {}",
            LocalizationKey::Countdown => "Перенаправлення через {} с",
            LocalizationKey::CancelHint => "Введіть 'c', щоб залишитися, або en / uk / fa, щоб обрати мову",
            LocalizationKey::ManualChoice => "Оберіть мову:",
            LocalizationKey::Redirecting => "➜ Відкриваємо {}",
            LocalizationKey::PreferenceSaved => "✓ Обрану мову збережено: {}",
            LocalizationKey::UnknownCommand => "Невідома команда: {}",
        }
    }

    pub fn get_persian(&self) -> &'static str {
        match self {
            LocalizationKey::Title => "راهنمای مقاومت مدنی",
            LocalizationKey::AvailableLanguages => "زبان‌های موجود",
            LocalizationKey::ColumnCode => "کد",
            LocalizationKey::ColumnLanguage => "زبان",
            LocalizationKey::ColumnPage => "صفحه",
            LocalizationKey::DetectedLanguage => "🌐 زبان شناسایی‌شده: {}",
            LocalizationKey::Countdown => "انتقال تا {} ثانیه دیگر",
            LocalizationKey::CancelHint => "برای ماندن 'c' را وارد کنید، یا en / uk / fa را برای انتخاب زبان",
            LocalizationKey::ManualChoice => "زبان خود را انتخاب کنید:",
            LocalizationKey::Redirecting => "➜ در حال باز کردن {}",
            LocalizationKey::PreferenceSaved => "✓ زبان انتخابی ذخیره شد: {}",
            LocalizationKey::UnknownCommand => "دستور ناشناخته: {}",
        }
    }
}
