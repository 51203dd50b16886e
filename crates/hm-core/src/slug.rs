//! Slug and code derivation for tenant identifiers.
//!
//! A tenant's slug is the lowercase, ASCII-safe, hyphen-separated form of
//! its display name plus a short random suffix; the code is the slug
//! uppercased. Both are generated once at provisioning and never change.

use rand::Rng;

/// Maximum length of the normalized base before the suffix is appended.
const MAX_BASE_LEN: usize = 40;

/// Length of the disambiguating suffix.
const SUFFIX_LEN: usize = 4;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Fallback base when a name normalizes to nothing.
const EMPTY_BASE: &str = "hotel";

/// Slug/code pair fixed at tenant creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantIdentifiers {
    pub slug: String,
    pub code: String,
}

/// Source of the disambiguating suffix. Injected so tests can pin exact
/// slugs; production uses [`RandomSuffixSource`].
pub trait SuffixSource: Send + Sync {
    fn suffix(&self) -> String;
}

/// Draws `[a-z0-9]` characters from the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSuffixSource;

impl SuffixSource for RandomSuffixSource {
    fn suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}

/// Normalize a display name: fold common Latin diacritics to ASCII,
/// lowercase, collapse non-alphanumeric runs to single hyphens, trim
/// hyphens at the edges, cap the length.
pub fn slugify(value: &str) -> String {
    let mut base = String::with_capacity(value.len());

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            base.push(ch.to_ascii_lowercase());
        } else if let Some(folded) = fold_latin(ch) {
            base.push_str(folded);
        } else if !base.is_empty() && !base.ends_with('-') {
            base.push('-');
        }
    }

    // Base is pure ASCII at this point, so byte truncation is char-safe.
    base.truncate(MAX_BASE_LEN);
    while base.ends_with('-') {
        base.pop();
    }

    if base.is_empty() {
        String::from(EMPTY_BASE)
    } else {
        base
    }
}

/// Derive a fresh slug/code pair. Each call draws a new suffix, so two
/// tenants with the same name still get distinct identifiers.
pub fn derive_identifiers(name: &str, suffixes: &dyn SuffixSource) -> TenantIdentifiers {
    let slug = format!("{}-{}", slugify(name), suffixes.suffix());
    let code = slug.to_uppercase();
    TenantIdentifiers { slug, code }
}

/// Normalize a user-entered hotel code back to slug form. Lookup by code is
/// case-insensitive.
pub fn code_to_slug(code: &str) -> String {
    code.trim().to_lowercase()
}

/// ASCII fold for the Latin accented characters that show up in hotel
/// names. Anything unmapped becomes a separator.
fn fold_latin(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' | 'İ' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Į' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' => "u",
        'ç' | 'ć' | 'č' | 'Ç' | 'Ć' | 'Č' => "c",
        'ñ' | 'ń' | 'ň' | 'Ñ' | 'Ń' | 'Ň' => "n",
        'ý' | 'ÿ' | 'Ý' => "y",
        'š' | 'ś' | 'Š' | 'Ś' => "s",
        'ž' | 'ź' | 'ż' | 'Ž' | 'Ź' | 'Ż' => "z",
        'ð' | 'Ð' | 'ď' | 'Ď' => "d",
        'ł' | 'Ł' => "l",
        'ř' | 'Ř' => "r",
        'ť' | 'Ť' => "t",
        'þ' | 'Þ' => "th",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => return None,
    };
    Some(folded)
}
