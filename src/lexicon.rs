//! Static bilingual tables backing the rule-based local translation engine.
//!
//! A [`Lexicon`] bundles the phrase table, the n-gram context rules, the
//! word dictionary and the three indicator sets used for case marking and
//! SOV reordering. It is built once and never mutated; the engine receives
//! it at construction time, so tests can substitute small fixture tables.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Immutable English-to-Urdu lookup tables.
///
/// All source-side keys are stored lowercased. The phrase table lives in a
/// `BTreeMap` so fuzzy matching iterates entries in a fixed lexical order
/// and tie-breaks deterministically.
#[derive(Debug, Clone)]
pub struct Lexicon {
    phrases: BTreeMap<String, String>,
    context_rules: HashMap<String, String>,
    two_word: HashMap<String, String>,
    words: HashMap<String, String>,
    verb_indicators: Vec<String>,
    subject_indicators: HashSet<String>,
    object_indicators: HashSet<String>,
}

impl Lexicon {
    pub fn new(
        phrases: &[(&str, &str)],
        context_rules: &[(&str, &str)],
        two_word: &[(&str, &str)],
        words: &[(&str, &str)],
        verb_indicators: &[&str],
        subject_indicators: &[&str],
        object_indicators: &[&str],
    ) -> Self {
        fn lower_pairs<C: FromIterator<(String, String)>>(pairs: &[(&str, &str)]) -> C {
            pairs
                .iter()
                .map(|(en, ur)| (en.to_lowercase(), (*ur).to_string()))
                .collect()
        }

        Self {
            phrases: lower_pairs(phrases),
            context_rules: lower_pairs(context_rules),
            two_word: lower_pairs(two_word),
            words: lower_pairs(words),
            verb_indicators: verb_indicators.iter().map(|s| (*s).to_string()).collect(),
            subject_indicators: subject_indicators.iter().map(|s| (*s).to_string()).collect(),
            object_indicators: object_indicators.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// The built-in Urdu lexicon compiled into the crate.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Exact phrase lookup; the key must already be lowercased.
    pub fn phrase(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// Phrase table entries in ascending lexical order of the English key.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phrases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn context_rule(&self, key: &str) -> Option<&str> {
        self.context_rules.get(key).map(String::as_str)
    }

    pub fn two_word(&self, key: &str) -> Option<&str> {
        self.two_word.get(key).map(String::as_str)
    }

    pub fn word(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    /// Exact membership in the verb indicator set.
    pub fn is_verb_indicator(&self, token: &str) -> bool {
        self.verb_indicators.iter().any(|v| v == token)
    }

    /// Whether any verb indicator is a suffix of the token.
    pub fn has_verb_suffix(&self, token: &str) -> bool {
        self.verb_indicators.iter().any(|v| token.ends_with(v.as_str()))
    }

    pub fn is_subject_indicator(&self, token: &str) -> bool {
        self.subject_indicators.contains(token)
    }

    pub fn is_object_indicator(&self, token: &str) -> bool {
        self.object_indicators.contains(token)
    }
}

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::new(
        PHRASES,
        CONTEXT_RULES,
        TWO_WORD,
        WORDS,
        VERB_INDICATORS,
        SUBJECT_INDICATORS,
        OBJECT_INDICATORS,
    )
});

/// Whole-phrase translations probed before word-level translation.
const PHRASES: &[(&str, &str)] = &[
    ("flight deals", "پرواز کے سودے"),
    ("cheap flights", "سستی پروازیں"),
    ("travel tips", "سفری تجاویز"),
    ("budget travel", "کم بجٹ سفر"),
    ("travel guide", "سفری رہنما"),
    ("booking hotels", "ہوٹل بکنگ"),
    ("vacation planning", "چھٹیوں کی منصوبہ بندی"),
    ("travel insurance", "سفری انشورنس"),
    ("local culture", "مقامی ثقافت"),
    ("tourist attractions", "سیاحتی مقامات"),
    ("deal-finding websites", "سستے سودوں کی ویب سائٹس"),
    ("free walking tours", "مفت پیدل دورے"),
    ("traditional travel infrastructure", "روایتی سفر کا انفراسٹرکچر"),
    ("sharing economy", "اشتراک معیشت"),
    ("unstoppable momentum", "رکنے ناقابل رفتار"),
    ("save money", "پیسہ بچانا"),
    ("cut expenses", "اخراجات کم کرنا"),
    ("travel cheap", "سستا سفر"),
    ("flight cost", "پرواز کی لاگت"),
    ("price alerts", "قیمت کے انتباہات"),
    ("amazing deals", "عمدہ سودے"),
];

/// 3-gram context keys resolved before shorter lookups.
const CONTEXT_RULES: &[(&str, &str)] = &[
    ("you can", "آپ کر سکتے ہیں"),
    ("i can", "میں کر سکتا ہوں"),
    ("we can", "ہم کر سکتے ہیں"),
    ("they can", "وہ کر سکتے ہیں"),
    ("will be", "ہوگا"),
    ("would be", "ہوگا"),
    ("should be", "ہونا چاہیے"),
    ("have been", "رہا ہے"),
    ("has been", "رہا ہے"),
    ("are going", "جا رہے ہیں"),
    ("is going", "جا رہا ہے"),
    ("was going", "جا رہا تھا"),
    ("were going", "جا رہے تھے"),
    ("started again", "دوبارہ شروع ہوئی"),
    ("happens to", "کے ساتھ ہوتا ہے"),
];

const TWO_WORD: &[(&str, &str)] = &[
    ("flight deals", "پرواز کے سودے"),
    ("travel tips", "سفری تجاویز"),
    ("best way", "بہترین طریقہ"),
    ("right now", "ابھی"),
    ("next time", "اگلی بار"),
    ("last year", "پچھلا سال"),
    ("this year", "اس سال"),
    ("every day", "ہر دن"),
    ("most people", "زیادہ تر لوگ"),
    ("first time", "پہلی بار"),
    ("long time", "لمبا وقت"),
    ("good idea", "اچھا خیال"),
    ("hard work", "محنت"),
    ("free time", "فارغ وقت"),
    ("real world", "حقیقی دنیا"),
    ("social media", "سوشل میڈیا"),
    ("high quality", "اعلیٰ معیار"),
    ("low cost", "کم قیمت"),
    ("big difference", "بڑا فرق"),
    ("small business", "چھوٹا کاروبار"),
    ("airfare down", "ہوائی سفر کی قیمت کم"),
    ("more cities", "زیادہ شہر"),
    ("directly into", "براہ راست"),
    ("local life", "مقامی زندگی"),
];

const VERB_INDICATORS: &[&str] = &[
    "ہے", "ہیں", "تھا", "تھے", "کرنا", "جانا", "ہونا", "آنا", "کرتا", "کرتے", "کرنے",
    "کریں", "کرو", "کر", "گا", "گے", "گی", "ہوا", "ہوئی", "ہوئے", "رہا", "رہے", "رہی",
    "بچانا", "تلاش", "جڑنا", "گرنا",
];

const SUBJECT_INDICATORS: &[&str] = &[
    "میں", "تم", "آپ", "وہ", "یہ", "ہم", "وے", "یے", "خود", "لوگ",
];

const OBJECT_INDICATORS: &[&str] = &[
    "کو", "کا", "کی", "کے", "سے", "میں", "پر", "تک", "زندگی", "سفر",
];

const WORDS: &[(&str, &str)] = &[
    ("the", "یہ"),
    ("and", "اور"),
    ("to", "کو"),
    ("of", "کا"),
    ("in", "میں"),
    ("is", "ہے"),
    ("that", "وہ"),
    ("a", "ایک"),
    ("for", "کے لیے"),
    ("with", "کے ساتھ"),
    ("on", "پر"),
    ("at", "پر"),
    ("by", "کے ذریعے"),
    ("from", "سے"),
    ("up", "اوپر"),
    ("about", "کے بارے میں"),
    ("has", "ہے"),
    ("have", "ہے"),
    ("are", "ہیں"),
    ("were", "تھے"),
    ("been", "تھا"),
    ("will", "گا"),
    ("would", "گا"),
    ("can", "سکتا ہے"),
    ("could", "سکتا تھا"),
    ("should", "چاہیے"),
    ("must", "لازمی"),
    ("may", "ممکن ہے"),
    ("might", "ہو سکتا ہے"),
    // Travel vocabulary
    ("airfare", "ہوائی سفر کی قیمت"),
    ("started", "شروع ہوئی"),
    ("down", "کمی"),
    ("again", "دوبارہ"),
    ("deal", "سودا"),
    ("finding", "تلاش"),
    ("websites", "ویب سائٹس"),
    ("online", "آن لائن"),
    ("free", "مفت"),
    ("walking", "پیدل"),
    ("tours", "دورے"),
    ("cities", "شہر"),
    ("opportunities", "مواقع"),
    ("bypass", "بچنا"),
    ("traditional", "روایتی"),
    ("travel", "سفر"),
    ("infrastructure", "انفراسٹرکچر"),
    ("directly", "براہ راست"),
    ("into", "میں"),
    ("local", "مقامی"),
    ("life", "زندگی"),
    ("via", "کے ذریعے"),
    ("sharing", "اشتراک"),
    ("economy", "معیشت"),
    ("thing", "چیز"),
    ("every", "ہر"),
    ("day", "دن"),
    ("gets", "لاتی ہے"),
    ("closer", "قریب"),
    ("trip", "سفر"),
    ("yourself", "خود"),
    ("building", "بنا رہی"),
    ("unstoppable", "رکنے ناقابل"),
    ("momentum", "رفتار"),
    ("figure", "اندازہ"),
    ("out", "لگانا"),
    ("where", "کہاں"),
    ("save", "بچانا"),
    ("money", "پیسہ"),
    ("going", "جا رہا"),
    ("here", "یہاں"),
    ("some", "کچھ"),
    ("posts", "پوسٹس"),
    ("how", "کیسے"),
    ("cut", "کم"),
    ("expenses", "اخراجات"),
    ("keep", "رکھنا"),
    ("ultimate", "بال نهایت"),
    ("guide", "رہنما"),
    ("cheap", "سستا"),
    ("number", "نمبر"),
    ("one", "ایک"),
    ("flight", "پرواز"),
    ("things", "چیزوں"),
    ("people", "لوگ"),
    ("always", "ہمیشہ"),
    ("tell", "بتاتے"),
    ("me", "مجھے"),
    ("holds", "روکتا"),
    ("them", "انہیں"),
    ("back", "پیچھے"),
    ("cost", "لاگت"),
    ("flights", "پروازیں"),
    ("open", "کھولنا"),
    ("france", "فرانس"),
    ("summer", "گرمی"),
    ("europe", "یورپ"),
    ("much", "بہت"),
    ("cheaper", "سستا"),
    ("since", "چونکہ"),
    ("lot", "بہت سا"),
    ("wiggle", "لچک"),
    ("room", "جگہ"),
    ("try", "کوشش"),
    ("dates", "تاریخیں"),
    ("destinations", "منزلیں"),
    ("both", "دونوں"),
    ("let", "دیتی"),
    ("sign", "سائن اپ"),
    ("price", "قیمت"),
    ("alerts", "انتباہات"),
    ("email", "ای میل"),
    ("happens", "ہوتا"),
    ("drop", "گرنا"),
    ("really", "سچی"),
    ("amazing", "عمدہ"),
    ("consider", "غور"),
    ("joining", "شامل"),
    ("site", "سائٹ"),
    ("like", "جیسے"),
    ("secret", "خفیہ"),
    ("flying", "اڑان"),
    ("another", "ایک اور"),
    ("around", "گرد"),
    ("globe", "دنیا"),
    ("they", "وہ"),
    ("asia", "ایشیا"),
    ("africa", "افریقہ"),
    ("south", "جنوب"),
    ("america", "امریکہ"),
    ("found", "ملا"),
    ("elsewhere", "کہیں اور"),
    ("optimizing", "مضبوط"),
    ("spending", "خرچ"),
    ("paying", "ادا"),
    ("attention", "توجہ"),
    ("which", "جو"),
    ("cards", "کارڈز"),
    ("earn", "کمانا"),
    ("most", "زیادہ"),
    ("points", "نوٹ"),
    ("saved", "بچایا"),
    ("thousands", "ہزاروں"),
    ("dollars", "ڈالر"),
    ("too", "بھی"),
    // Everyday vocabulary
    ("road", "سڑک"),
    ("happened", "واقع ہوئی"),
    ("exciting", "دلچسپ"),
    ("adventures", "مہم جوئیوں"),
    ("fascinating", "دلچسپ"),
    ("possibilities", "امکانات"),
    ("dreary", "تکلیف دہ"),
    ("commutes", "سفر"),
    ("lunch", "لنچ"),
    ("breaks", "وقفے"),
    ("meetings", "میٹنگیں"),
    ("lists", "فہرست"),
    ("to-dos", "کاموں"),
    ("squeezed", "جلدی سے مکمل کیے گئے"),
    ("rushed", "جلدی"),
    ("weekend", "ہفتے کا آخر"),
    ("quit", "چھوڑ دی"),
    ("job", "نوکری"),
    ("set", "چلا"),
    ("off", "پر"),
    ("experience", "تجربہ"),
    ("world", "دنیا"),
    ("offer", "پیش"),
    ("last", "چل"),
    ("understand", "سمجھ"),
    ("someone", "شخص"),
    ("setting", "شروع"),
    ("romantic", "رومانوی"),
    ("notions", "خیالات"),
    ("burn", "ثک"),
    ("years", "سالوں"),
    ("later", "بعد"),
    ("decided", "فیصلہ کیا"),
    ("nomad", "نوآبادی"),
    ("longer", "مناسب نہیں رہی"),
    ("stop", "بند"),
    ("traveling", "سفر"),
    ("full-time", "مکمل وقت"),
    ("lived", "رہا"),
    ("between", "کے درمیان"),
    ("worlds", "دنیاؤں"),
    ("longing", "لالچ"),
    ("home", "گھر"),
    ("head", "نکلنے"),
    ("brain", "دماغ"),
    ("route", "راستہ"),
    ("work", "کام"),
    ("tire", "ثک جاتا"),
    ("routines", "معمولات"),
    ("put", "چلانے"),
    ("autopilot", "خودکار طریقے سے"),
    ("energy", "توانائی"),
    ("emotions", "جذبات"),
    ("thoughts", "خیالات"),
    ("takes", "لگتی"),
    ("mental", "ذہنی"),
    ("repack", "دوبارہ ترتیب"),
    ("bag", "بیگ"),
    ("say", "کہنے"),
    ("good-bye", "الوداع"),
    ("person", "شخص"),
    ("met", "ملے"),
    ("yesterday", "کل"),
    ("navigate", "ناولگنے"),
    ("unfamiliar", "غیر واقف"),
    ("lands", "زمینوں"),
    ("languages", "زبانوں"),
    ("likewise", "اسی طرح"),
    ("bed", "بستر"),
    ("felt", "لگتا"),
    ("good", "اچھا"),
    ("spent", "گزارے"),
    ("move", "حرکت"),
    ("changing", "بدلتے"),
    ("rooms", "کمروں"),
    ("erratic", "غیر منظم"),
    ("sleep", "نیند"),
];
