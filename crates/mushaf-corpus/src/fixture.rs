//! Generated corpus documents for tests.
//!
//! The scripture text is not part of this repository, so test suites run against a
//! generated document. The canonical fixture follows the real layout: all 114 chapter names,
//! verse counts, revelation periods and revelation order, the Juz and Hizb boundaries, and
//! the 15 prostration verses. Verse text is a placeholder of the form `"<name> (c:v)"`, which
//! makes every `(c:v)` marker unique across the corpus.
//!
//! The small fixture holds three chapters and exercises corpora other than the canonical one.

use std::sync::Arc;

use crate::{
    Chapter, Corpus, CorpusDocument, DEFAULT_SOURCE, DEFAULT_VERSION,
    RevelationPeriod::{self, Meccan, Medinan},
    Verse, juz_of_hizb,
};

/// Canonical chapter table: original-script name, display name, period, verse count,
/// revelation order.
const CHAPTERS: [(&str, &str, RevelationPeriod, u16, u16); 114] = [
    ("الفاتحة", "Al-Faatiha", Meccan, 7, 5),
    ("البقرة", "Al-Baqara", Medinan, 286, 87),
    ("آل عمران", "Aal-i-Imraan", Medinan, 200, 89),
    ("النساء", "An-Nisaa", Medinan, 176, 92),
    ("المائدة", "Al-Maaida", Medinan, 120, 112),
    ("الأنعام", "Al-An'aam", Meccan, 165, 55),
    ("الأعراف", "Al-A'raaf", Meccan, 206, 39),
    ("الأنفال", "Al-Anfaal", Medinan, 75, 88),
    ("التوبة", "At-Tawba", Medinan, 129, 113),
    ("يونس", "Yunus", Meccan, 109, 51),
    ("هود", "Hud", Meccan, 123, 52),
    ("يوسف", "Yusuf", Meccan, 111, 53),
    ("الرعد", "Ar-Ra'd", Medinan, 43, 96),
    ("ابراهيم", "Ibrahim", Meccan, 52, 72),
    ("الحجر", "Al-Hijr", Meccan, 99, 54),
    ("النحل", "An-Nahl", Meccan, 128, 70),
    ("الإسراء", "Al-Israa", Meccan, 111, 50),
    ("الكهف", "Al-Kahf", Meccan, 110, 69),
    ("مريم", "Maryam", Meccan, 98, 44),
    ("طه", "Taa-Haa", Meccan, 135, 45),
    ("الأنبياء", "Al-Anbiyaa", Meccan, 112, 73),
    ("الحج", "Al-Hajj", Medinan, 78, 103),
    ("المؤمنون", "Al-Muminoon", Meccan, 118, 74),
    ("النور", "An-Noor", Medinan, 64, 102),
    ("الفرقان", "Al-Furqaan", Meccan, 77, 42),
    ("الشعراء", "Ash-Shu'araa", Meccan, 227, 47),
    ("النمل", "An-Naml", Meccan, 93, 48),
    ("القصص", "Al-Qasas", Meccan, 88, 49),
    ("العنكبوت", "Al-Ankaboot", Meccan, 69, 85),
    ("الروم", "Ar-Room", Meccan, 60, 84),
    ("لقمان", "Luqman", Meccan, 34, 57),
    ("السجدة", "As-Sajda", Meccan, 30, 75),
    ("الأحزاب", "Al-Ahzaab", Medinan, 73, 90),
    ("سبإ", "Saba", Meccan, 54, 58),
    ("فاطر", "Faatir", Meccan, 45, 43),
    ("يس", "Yaseen", Meccan, 83, 41),
    ("الصافات", "As-Saaffaat", Meccan, 182, 56),
    ("ص", "Saad", Meccan, 88, 38),
    ("الزمر", "Az-Zumar", Meccan, 75, 59),
    ("غافر", "Al-Ghaafir", Meccan, 85, 60),
    ("فصلت", "Fussilat", Meccan, 54, 61),
    ("الشورى", "Ash-Shura", Meccan, 53, 62),
    ("الزخرف", "Az-Zukhruf", Meccan, 89, 63),
    ("الدخان", "Ad-Dukhaan", Meccan, 59, 64),
    ("الجاثية", "Al-Jaathiya", Meccan, 37, 65),
    ("الأحقاف", "Al-Ahqaf", Meccan, 35, 66),
    ("محمد", "Muhammad", Medinan, 38, 95),
    ("الفتح", "Al-Fath", Medinan, 29, 111),
    ("الحجرات", "Al-Hujuraat", Medinan, 18, 106),
    ("ق", "Qaaf", Meccan, 45, 34),
    ("الذاريات", "Adh-Dhaariyat", Meccan, 60, 67),
    ("الطور", "At-Tur", Meccan, 49, 76),
    ("النجم", "An-Najm", Meccan, 62, 23),
    ("القمر", "Al-Qamar", Meccan, 55, 37),
    ("الرحمن", "Ar-Rahmaan", Medinan, 78, 97),
    ("الواقعة", "Al-Waaqia", Meccan, 96, 46),
    ("الحديد", "Al-Hadid", Medinan, 29, 94),
    ("المجادلة", "Al-Mujaadila", Medinan, 22, 105),
    ("الحشر", "Al-Hashr", Medinan, 24, 101),
    ("الممتحنة", "Al-Mumtahana", Medinan, 13, 91),
    ("الصف", "As-Saff", Medinan, 14, 109),
    ("الجمعة", "Al-Jumu'a", Medinan, 11, 110),
    ("المنافقون", "Al-Munaafiqoon", Medinan, 11, 104),
    ("التغابن", "At-Taghaabun", Medinan, 18, 108),
    ("الطلاق", "At-Talaaq", Medinan, 12, 99),
    ("التحريم", "At-Tahrim", Medinan, 12, 107),
    ("الملك", "Al-Mulk", Meccan, 30, 77),
    ("القلم", "Al-Qalam", Meccan, 52, 2),
    ("الحاقة", "Al-Haaqqa", Meccan, 52, 78),
    ("المعارج", "Al-Ma'aarij", Meccan, 44, 79),
    ("نوح", "Nooh", Meccan, 28, 71),
    ("الجن", "Al-Jinn", Meccan, 28, 40),
    ("المزمل", "Al-Muzzammil", Meccan, 20, 3),
    ("المدثر", "Al-Muddaththir", Meccan, 56, 4),
    ("القيامة", "Al-Qiyaama", Meccan, 40, 31),
    ("الانسان", "Al-Insaan", Medinan, 31, 98),
    ("المرسلات", "Al-Mursalaat", Meccan, 50, 33),
    ("النبإ", "An-Naba", Meccan, 40, 80),
    ("النازعات", "An-Naazi'aat", Meccan, 46, 81),
    ("عبس", "Abasa", Meccan, 42, 24),
    ("التكوير", "At-Takwir", Meccan, 29, 7),
    ("الإنفطار", "Al-Infitaar", Meccan, 19, 82),
    ("المطففين", "Al-Mutaffifin", Meccan, 36, 86),
    ("الإنشقاق", "Al-Inshiqaaq", Meccan, 25, 83),
    ("البروج", "Al-Burooj", Meccan, 22, 27),
    ("الطارق", "At-Taariq", Meccan, 17, 36),
    ("الأعلى", "Al-A'laa", Meccan, 19, 8),
    ("الغاشية", "Al-Ghaashiya", Meccan, 26, 68),
    ("الفجر", "Al-Fajr", Meccan, 30, 10),
    ("البلد", "Al-Balad", Meccan, 20, 35),
    ("الشمس", "Ash-Shams", Meccan, 15, 26),
    ("الليل", "Al-Lail", Meccan, 21, 9),
    ("الضحى", "Ad-Dhuhaa", Meccan, 11, 11),
    ("الشرح", "Ash-Sharh", Meccan, 8, 12),
    ("التين", "At-Tin", Meccan, 8, 28),
    ("العلق", "Al-Alaq", Meccan, 19, 1),
    ("القدر", "Al-Qadr", Meccan, 5, 25),
    ("البينة", "Al-Bayyina", Medinan, 8, 100),
    ("الزلزلة", "Az-Zalzala", Medinan, 8, 93),
    ("العاديات", "Al-Aadiyaat", Meccan, 11, 14),
    ("القارعة", "Al-Qaari'a", Meccan, 11, 30),
    ("التكاثر", "At-Takaathur", Meccan, 8, 16),
    ("العصر", "Al-Asr", Meccan, 3, 13),
    ("الهمزة", "Al-Humaza", Meccan, 9, 32),
    ("الفيل", "Al-Fil", Meccan, 5, 19),
    ("قريش", "Quraish", Meccan, 4, 29),
    ("الماعون", "Al-Maa'un", Meccan, 7, 17),
    ("الكوثر", "Al-Kawthar", Meccan, 3, 15),
    ("الكافرون", "Al-Kaafiroon", Meccan, 6, 18),
    ("النصر", "An-Nasr", Medinan, 3, 114),
    ("المسد", "Al-Masad", Meccan, 5, 6),
    ("الإخلاص", "Al-Ikhlaas", Meccan, 4, 22),
    ("الفلق", "Al-Falaq", Meccan, 5, 20),
    ("الناس", "An-Naas", Meccan, 6, 21),
];

/// First verse (chapter, verse) of each Hizb. Odd Hizb open a new Juz.
const HIZB_STARTS: [(u16, u16); 60] = [
    (1, 1), (2, 75), (2, 142), (2, 203), (2, 253), (3, 15), (3, 93), (3, 171), (4, 24), (4, 88),
    (4, 148), (5, 27), (5, 82), (6, 36), (6, 111), (7, 1), (7, 88), (7, 171), (8, 41), (9, 34),
    (9, 93), (10, 26), (11, 6), (11, 84), (12, 53), (13, 19), (15, 1), (16, 51), (17, 1),
    (17, 99), (18, 75), (20, 1), (21, 1), (22, 1), (23, 1), (24, 21), (25, 21), (26, 111),
    (27, 56), (28, 51), (29, 46), (31, 22), (33, 31), (34, 24), (36, 28), (37, 145), (39, 32),
    (40, 41), (41, 47), (43, 24), (46, 1), (48, 18), (51, 31), (55, 1), (58, 1), (62, 1),
    (67, 1), (72, 1), (78, 1), (87, 1),
];

/// Verses carrying the prostration marker.
const PROSTRATIONS: [(u16, u16); 15] = [
    (7, 206), (13, 15), (16, 50), (17, 109), (19, 58), (22, 18), (22, 77), (25, 60), (27, 26),
    (32, 15), (38, 24), (41, 38), (53, 62), (84, 21), (96, 19),
];

/// Returns the unique marker embedded in a fixture verse's text.
pub fn verse_marker(chapter: u16, verse: u16) -> String {
    format!("({chapter}:{verse})")
}

/// Builds placeholder text for a fixture verse.
fn verse_text(name: &str, chapter: u16, verse: u16) -> Arc<str> {
    Arc::from(format!("{name} {}", verse_marker(chapter, verse)))
}

/// Builds a fixture chapter from its table row.
fn chapter(
    id: u16,
    (name, transliteration, period, count, order): (&str, &str, RevelationPeriod, u16, u16),
    verses: Vec<Verse>,
) -> Chapter {
    debug_assert_eq!(verses.len(), usize::from(count));
    Chapter {
        id,
        name: Arc::from(name),
        transliteration: Arc::from(transliteration),
        revelation_period: period,
        verse_count: count,
        revelation_order: order,
        verses,
    }
}

/// Returns the canonical-layout document.
pub fn canonical_document() -> CorpusDocument {
    let mut chapters = Vec::with_capacity(CHAPTERS.len());
    let mut hizb_index = 0;

    for (index, row) in CHAPTERS.iter().enumerate() {
        let id = index as u16 + 1;
        let mut verses = Vec::with_capacity(usize::from(row.3));
        for verse in 1..=row.3 {
            while hizb_index + 1 < HIZB_STARTS.len() && HIZB_STARTS[hizb_index + 1] <= (id, verse)
            {
                hizb_index += 1;
            }
            let hizb = hizb_index as u8 + 1;
            verses.push(Verse {
                id: verse,
                text: verse_text(row.0, id, verse),
                prostration: PROSTRATIONS.contains(&(id, verse)),
                juz: juz_of_hizb(hizb),
                hizb,
            });
        }
        chapters.push(chapter(id, *row, verses));
    }

    CorpusDocument {
        version: DEFAULT_VERSION.to_string(),
        source: DEFAULT_SOURCE.to_string(),
        chapters,
    }
}

/// Returns the canonical-layout corpus.
pub fn canonical_corpus() -> Corpus {
    Corpus::from_document(canonical_document()).expect("canonical fixture is indexable")
}

/// Returns the canonical-layout document as JSON.
pub fn canonical_json() -> String {
    serde_json::to_string(&canonical_document()).expect("fixture serializes")
}

/// Returns a three-chapter document: 7, 19 and 3 verses, one prostration verse (2:19),
/// spanning Juz 1-2 and Hizb 1-3.
pub fn small_document() -> CorpusDocument {
    let rows = [
        ("الفاتحة", "Al-Faatiha", Meccan, 7, 5, 1),
        ("العلق", "Al-Alaq", Meccan, 19, 1, 2),
        ("النصر", "An-Nasr", Medinan, 3, 114, 3),
    ];
    let chapters = rows
        .iter()
        .enumerate()
        .map(|(index, &(name, transliteration, period, count, order, hizb))| {
            let id = index as u16 + 1;
            let verses = (1..=count)
                .map(|verse| Verse {
                    id: verse,
                    text: verse_text(name, id, verse),
                    prostration: (id, verse) == (2, 19),
                    juz: juz_of_hizb(hizb),
                    hizb,
                })
                .collect();
            chapter(id, (name, transliteration, period, count, order), verses)
        })
        .collect();

    CorpusDocument {
        version: DEFAULT_VERSION.to_string(),
        source: "fixture".to_string(),
        chapters,
    }
}

/// Returns the three-chapter corpus.
pub fn small_corpus() -> Corpus {
    Corpus::from_document(small_document()).expect("small fixture is indexable")
}

/// Returns the three-chapter document as JSON.
pub fn small_json() -> String {
    serde_json::to_string(&small_document()).expect("fixture serializes")
}
