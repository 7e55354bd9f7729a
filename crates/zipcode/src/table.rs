//! # Built-in Pattern Table
//!
//! Zip code regular expressions per ISO 3166-1 alpha-2 country code, taken
//! from Google's address metadata service
//! (<https://chromium-i18n.appspot.com/ssl-address>).
//!
//! Sources are kept verbatim. They are NOT self-anchored: whole-string
//! matching is applied when a source is compiled into a
//! [`ZipPattern`](crate::ZipPattern).
//!
//! Entries are sorted by country code. Keys must be unique two-letter
//! uppercase codes; [`PatternRegistry::from_entries`](crate::PatternRegistry::from_entries)
//! rejects anything else.

/// Number of countries in [`ZIP_CODE_PATTERNS`].
pub const ZIP_CODE_PATTERN_COUNT: usize = 178;

/// The built-in `(country code, pattern source)` table.
pub static ZIP_CODE_PATTERNS: &[(&str, &str)] = &[
    ("AC", r"ASCN 1ZZ"),
    ("AD", r"AD[1-7]0\d"),
    ("AF", r"\d{4}"),
    ("AI", r"(?:AI-)?2640"),
    ("AL", r"\d{4}"),
    ("AM", r"(?:37)?\d{4}"),
    ("AR", r"((?:[A-HJ-NP-Z])?\d{4})([A-Z]{3})?"),
    ("AS", r"(96799)(?:[ \-](\d{4}))?"),
    ("AT", r"\d{4}"),
    ("AU", r"\d{4}"),
    ("AX", r"22\d{3}"),
    ("AZ", r"\d{4}"),
    ("BA", r"\d{5}"),
    ("BB", r"BB\d{5}"),
    ("BD", r"\d{4}"),
    ("BE", r"\d{4}"),
    ("BG", r"\d{4}"),
    ("BH", r"(?:\d|1[0-2])\d{2}"),
    ("BL", r"9[78][01]\d{2}"),
    ("BM", r"[A-Z]{2} ?[A-Z0-9]{2}"),
    ("BN", r"[A-Z]{2} ?\d{4}"),
    ("BR", r"\d{5}-?\d{3}"),
    ("BT", r"\d{5}"),
    ("BY", r"\d{6}"),
    ("CA", r"[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d"),
    ("CC", r"6799"),
    ("CH", r"\d{4}"),
    ("CL", r"\d{7}"),
    ("CN", r"\d{6}"),
    ("CO", r"\d{6}"),
    ("CR", r"\d{4,5}|\d{3}-\d{4}"),
    ("CV", r"\d{4}"),
    ("CX", r"6798"),
    ("CY", r"\d{4}"),
    ("CZ", r"\d{3} ?\d{2}"),
    ("DE", r"\d{5}"),
    ("DK", r"\d{4}"),
    ("DO", r"\d{5}"),
    ("DZ", r"\d{5}"),
    ("EC", r"\d{6}"),
    ("EE", r"\d{5}"),
    ("EG", r"\d{5}"),
    ("EH", r"\d{5}"),
    ("ES", r"\d{5}"),
    ("ET", r"\d{4}"),
    ("FI", r"\d{5}"),
    ("FK", r"FIQQ 1ZZ"),
    ("FM", r"(9694[1-4])(?:[ \-](\d{4}))?"),
    ("FO", r"\d{3}"),
    ("FR", r"\d{2} ?\d{3}"),
    ("GB", r"GIR ?0AA|(?:(?:AB|AL|B|BA|BB|BD|BF|BH|BL|BN|BR|BS|BT|BX|CA|CB|CF|CH|CM|CO|CR|CT|CV|CW|DA|DD|DE|DG|DH|DL|DN|DT|DY|E|EC|EH|EN|EX|FK|FY|G|GL|GY|GU|HA|HD|HG|HP|HR|HS|HU|HX|IG|IM|IP|IV|JE|KA|KT|KW|KY|L|LA|LD|LE|LL|LN|LS|LU|M|ME|MK|ML|N|NE|NG|NN|NP|NR|NW|OL|OX|PA|PE|PH|PL|PO|PR|RG|RH|RM|S|SA|SE|SG|SK|SL|SM|SN|SO|SP|SR|SS|ST|SW|SY|TA|TD|TF|TN|TQ|TR|TS|TW|UB|W|WA|WC|WD|WF|WN|WR|WS|WV|YO|ZE)(?:\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}))|BFPO ?\d{1,4}"),
    ("GE", r"\d{4}"),
    ("GF", r"9[78]3\d{2}"),
    ("GG", r"GY\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
    ("GI", r"GX11 1AA"),
    ("GL", r"39\d{2}"),
    ("GN", r"\d{3}"),
    ("GP", r"9[78][01]\d{2}"),
    ("GR", r"\d{3} ?\d{2}"),
    ("GS", r"SIQQ 1ZZ"),
    ("GT", r"\d{5}"),
    ("GU", r"(969(?:[12]\d|3[12]))(?:[ \-](\d{4}))?"),
    ("GW", r"\d{4}"),
    ("HM", r"\d{4}"),
    ("HN", r"\d{5}"),
    ("HR", r"\d{5}"),
    ("HT", r"\d{4}"),
    ("HU", r"\d{4}"),
    ("ID", r"\d{5}"),
    ("IE", r"[\dA-Z]{3} ?[\dA-Z]{4}"),
    ("IL", r"\d{5}(?:\d{2})?"),
    ("IM", r"IM\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
    ("IN", r"\d{6}"),
    ("IO", r"BBND 1ZZ"),
    ("IQ", r"\d{5}"),
    ("IR", r"\d{5}-?\d{5}"),
    ("IS", r"\d{3}"),
    ("IT", r"\d{5}"),
    ("JE", r"JE\d[\dA-Z]? ?\d[ABD-HJLN-UW-Z]{2}"),
    ("JO", r"\d{5}"),
    ("JP", r"\d{3}-?\d{4}"),
    ("KE", r"\d{5}"),
    ("KG", r"\d{6}"),
    ("KH", r"\d{5}"),
    ("KR", r"\d{5}"),
    ("KW", r"\d{5}"),
    ("KY", r"KY\d-\d{4}"),
    ("KZ", r"\d{6}"),
    ("LA", r"\d{5}"),
    ("LB", r"(?:\d{4})(?: ?(?:\d{4}))?"),
    ("LI", r"948[5-9]|949[0-8]"),
    ("LK", r"\d{5}"),
    ("LR", r"\d{4}"),
    ("LS", r"\d{3}"),
    ("LT", r"\d{5}"),
    ("LU", r"\d{4}"),
    ("LV", r"LV-\d{4}"),
    ("MA", r"\d{5}"),
    ("MC", r"980\d{2}"),
    ("MD", r"\d{4}"),
    ("ME", r"8\d{4}"),
    ("MF", r"9[78][01]\d{2}"),
    ("MG", r"\d{3}"),
    ("MH", r"(969[67]\d)(?:[ \-](\d{4}))?"),
    ("MK", r"\d{4}"),
    ("MM", r"\d{5}"),
    ("MN", r"\d{5}"),
    ("MP", r"(9695[012])(?:[ \-](\d{4}))?"),
    ("MQ", r"9[78]2\d{2}"),
    ("MT", r"[A-Z]{3} ?\d{2,4}"),
    ("MU", r"\d{3}(?:\d{2}|[A-Z]{2}\d{3})"),
    ("MV", r"\d{5}"),
    ("MX", r"\d{5}"),
    ("MY", r"\d{5}"),
    ("MZ", r"\d{4}"),
    ("NC", r"988\d{2}"),
    ("NE", r"\d{4}"),
    ("NF", r"2899"),
    ("NG", r"\d{6}"),
    ("NI", r"\d{5}"),
    ("NL", r"\d{4} ?[A-Z]{2}"),
    ("NO", r"\d{4}"),
    ("NP", r"\d{5}"),
    ("NZ", r"\d{4}"),
    ("OM", r"(?:PC )?\d{3}"),
    ("PE", r"(?:LIMA \d{1,2}|CALLAO 0?\d)|[0-2]\d{4}"),
    ("PF", r"987\d{2}"),
    ("PG", r"\d{3}"),
    ("PH", r"\d{4}"),
    ("PK", r"\d{5}"),
    ("PL", r"\d{2}-\d{3}"),
    ("PM", r"9[78]5\d{2}"),
    ("PN", r"PCRN 1ZZ"),
    ("PR", r"(00[679]\d{2})(?:[ \-](\d{4}))?"),
    ("PT", r"\d{4}-\d{3}"),
    ("PW", r"(969(?:39|40))(?:[ \-](\d{4}))?"),
    ("PY", r"\d{4}"),
    ("RE", r"9[78]4\d{2}"),
    ("RO", r"\d{6}"),
    ("RS", r"\d{5,6}"),
    ("RU", r"\d{6}"),
    ("SA", r"\d{5}"),
    ("SE", r"\d{3} ?\d{2}"),
    ("SG", r"\d{6}"),
    ("SH", r"(?:ASCN|STHL) 1ZZ"),
    ("SI", r"\d{4}"),
    ("SJ", r"\d{4}"),
    ("SK", r"\d{3} ?\d{2}"),
    ("SM", r"4789\d"),
    ("SN", r"\d{5}"),
    ("SO", r"[A-Z]{2} ?\d{5}"),
    ("SV", r"CP [1-3][1-7][0-2]\d"),
    ("SZ", r"[HLMS]\d{3}"),
    ("TA", r"TDCU 1ZZ"),
    ("TC", r"TKCA 1ZZ"),
    ("TH", r"\d{5}"),
    ("TJ", r"\d{6}"),
    ("TM", r"\d{6}"),
    ("TN", r"\d{4}"),
    ("TR", r"\d{5}"),
    ("TW", r"\d{3}(?:\d{2})?"),
    ("TZ", r"\d{4,5}"),
    ("UA", r"\d{5}"),
    ("UM", r"96898"),
    ("US", r"(\d{5})(?:[ \-](\d{4}))?"),
    ("UY", r"\d{5}"),
    ("UZ", r"\d{6}"),
    ("VA", r"00120"),
    ("VC", r"VC\d{4}"),
    ("VE", r"\d{4}"),
    ("VG", r"VG\d{4}"),
    ("VI", r"(008(?:(?:[0-4]\d)|(?:5[01])))(?:[ \-](\d{4}))?"),
    ("VN", r"\d{6}"),
    ("WF", r"986\d{2}"),
    ("XK", r"[1-7]\d{4}"),
    ("YT", r"976\d{2}"),
    ("ZA", r"\d{4}"),
    ("ZM", r"\d{5}"),
];
