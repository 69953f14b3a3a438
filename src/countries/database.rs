//! Embedded ISO 3166-1 country table with exact and fuzzy lookup.
//!
//! Names follow the ISO 3166 canonical spelling ("Korea, Republic of",
//! "Bolivia, Plurinational State of", ...). Map files rarely use these
//! spellings verbatim, which is what the override table and fuzzy search
//! make up for.

/// One country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
}

impl CountryRecord {
    const fn new(alpha_2: &'static str, alpha_3: &'static str, name: &'static str) -> Self {
        Self {
            alpha_2,
            alpha_3,
            name,
            official_name: None,
            common_name: None,
        }
    }

    const fn official(mut self, official_name: &'static str) -> Self {
        self.official_name = Some(official_name);
        self
    }

    const fn common(mut self, common_name: &'static str) -> Self {
        self.common_name = Some(common_name);
        self
    }

    /// Every name field, for exact lookups.
    fn names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.name), self.official_name, self.common_name]
            .into_iter()
            .flatten()
    }

    /// Name fields scanned for substrings by [`search_fuzzy`], in priority
    /// order. Common names only take part in exact lookups.
    fn searchable_names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.name), self.official_name].into_iter().flatten()
    }
}

/// Find a country whose canonical `name` equals `name`, ignoring case.
pub fn get_by_name<'a>(countries: &'a [CountryRecord], name: &str) -> Option<&'a CountryRecord> {
    let name = name.to_lowercase();
    countries.iter().find(|c| c.name.to_lowercase() == name)
}

/// Find a country by alpha-2 or alpha-3 code or any of its names,
/// ignoring case.
pub fn lookup<'a>(countries: &'a [CountryRecord], query: &str) -> Option<&'a CountryRecord> {
    let query = query.to_lowercase();
    countries.iter().find(|c| {
        c.alpha_2.to_lowercase() == query
            || c.alpha_3.to_lowercase() == query
            || c.names().any(|n| n.to_lowercase() == query)
    })
}

/// Rank countries against a free-form query, best match first.
///
/// An exact hit on any code or name scores 50. A substring hit in the
/// canonical or official name scores `max(5, 30 - 2 * position)`, counted once per country. Ties are
/// broken by code. Returns an empty list when nothing matches.
pub fn search_fuzzy<'a>(countries: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    let query = fold_accents(&query.trim().to_lowercase());
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &CountryRecord)> = Vec::new();
    let mut add = |country: &'a CountryRecord, points: u32| {
        match scored.iter_mut().find(|(_, c)| c.alpha_2 == country.alpha_2) {
            Some((score, _)) => *score += points,
            None => scored.push((points, country)),
        }
    };

    if let Some(country) = lookup(countries, &query) {
        add(country, 50);
    }

    for country in countries {
        let hit = country.searchable_names().find_map(|name| {
            let name = fold_accents(&name.to_lowercase());
            name.find(&query).map(|byte_pos| name[..byte_pos].chars().count())
        });
        if let Some(pos) = hit {
            let points = 30u32.saturating_sub(2 * pos as u32).max(5);
            add(country, points);
        }
    }

    scored.sort_by(|(a_score, a), (b_score, b)| {
        b_score.cmp(a_score).then_with(|| a.alpha_2.cmp(b.alpha_2))
    });
    scored.into_iter().map(|(_, country)| country).collect()
}

/// Strip diacritics from the accented Latin letters used in country names.
/// Expects lowercase input.
///
/// Only letters that occur in [`COUNTRIES`] (plus their close neighbours)
/// are folded; anything else, such as `ř` or `ł`, passes through unchanged
/// and simply fails to match.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
            'ç' | 'č' | 'ć' => 'c',
            'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
            'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
            'ñ' | 'ń' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
            'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
            'ý' | 'ÿ' => 'y',
            'š' | 'ś' => 's',
            'ž' | 'ź' | 'ż' => 'z',
            other => other,
        })
        .collect()
}

/// ISO 3166-1 entries.
pub static COUNTRIES: &[CountryRecord] = &[
    CountryRecord::new("AW", "ABW", "Aruba"),
    CountryRecord::new("AF", "AFG", "Afghanistan").official("Islamic Republic of Afghanistan"),
    CountryRecord::new("AO", "AGO", "Angola").official("Republic of Angola"),
    CountryRecord::new("AI", "AIA", "Anguilla"),
    CountryRecord::new("AX", "ALA", "Åland Islands"),
    CountryRecord::new("AL", "ALB", "Albania").official("Republic of Albania"),
    CountryRecord::new("AD", "AND", "Andorra").official("Principality of Andorra"),
    CountryRecord::new("AE", "ARE", "United Arab Emirates"),
    CountryRecord::new("AR", "ARG", "Argentina").official("Argentine Republic"),
    CountryRecord::new("AM", "ARM", "Armenia").official("Republic of Armenia"),
    CountryRecord::new("AS", "ASM", "American Samoa"),
    CountryRecord::new("AQ", "ATA", "Antarctica"),
    CountryRecord::new("TF", "ATF", "French Southern Territories"),
    CountryRecord::new("AG", "ATG", "Antigua and Barbuda"),
    CountryRecord::new("AU", "AUS", "Australia"),
    CountryRecord::new("AT", "AUT", "Austria").official("Republic of Austria"),
    CountryRecord::new("AZ", "AZE", "Azerbaijan").official("Republic of Azerbaijan"),
    CountryRecord::new("BI", "BDI", "Burundi").official("Republic of Burundi"),
    CountryRecord::new("BE", "BEL", "Belgium").official("Kingdom of Belgium"),
    CountryRecord::new("BJ", "BEN", "Benin").official("Republic of Benin"),
    CountryRecord::new("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    CountryRecord::new("BF", "BFA", "Burkina Faso"),
    CountryRecord::new("BD", "BGD", "Bangladesh").official("People's Republic of Bangladesh"),
    CountryRecord::new("BG", "BGR", "Bulgaria").official("Republic of Bulgaria"),
    CountryRecord::new("BH", "BHR", "Bahrain").official("Kingdom of Bahrain"),
    CountryRecord::new("BS", "BHS", "Bahamas").official("Commonwealth of the Bahamas"),
    CountryRecord::new("BA", "BIH", "Bosnia and Herzegovina").official("Republic of Bosnia and Herzegovina"),
    CountryRecord::new("BL", "BLM", "Saint Barthélemy"),
    CountryRecord::new("BY", "BLR", "Belarus").official("Republic of Belarus"),
    CountryRecord::new("BZ", "BLZ", "Belize"),
    CountryRecord::new("BM", "BMU", "Bermuda"),
    CountryRecord::new("BO", "BOL", "Bolivia, Plurinational State of")
        .official("Plurinational State of Bolivia")
        .common("Bolivia"),
    CountryRecord::new("BR", "BRA", "Brazil").official("Federative Republic of Brazil"),
    CountryRecord::new("BB", "BRB", "Barbados"),
    CountryRecord::new("BN", "BRN", "Brunei Darussalam"),
    CountryRecord::new("BT", "BTN", "Bhutan").official("Kingdom of Bhutan"),
    CountryRecord::new("BV", "BVT", "Bouvet Island"),
    CountryRecord::new("BW", "BWA", "Botswana").official("Republic of Botswana"),
    CountryRecord::new("CF", "CAF", "Central African Republic"),
    CountryRecord::new("CA", "CAN", "Canada"),
    CountryRecord::new("CC", "CCK", "Cocos (Keeling) Islands"),
    CountryRecord::new("CH", "CHE", "Switzerland").official("Swiss Confederation"),
    CountryRecord::new("CL", "CHL", "Chile").official("Republic of Chile"),
    CountryRecord::new("CN", "CHN", "China").official("People's Republic of China"),
    CountryRecord::new("CI", "CIV", "Côte d'Ivoire").official("Republic of Côte d'Ivoire"),
    CountryRecord::new("CM", "CMR", "Cameroon").official("Republic of Cameroon"),
    CountryRecord::new("CD", "COD", "Congo, The Democratic Republic of the"),
    CountryRecord::new("CG", "COG", "Congo").official("Republic of the Congo"),
    CountryRecord::new("CK", "COK", "Cook Islands"),
    CountryRecord::new("CO", "COL", "Colombia").official("Republic of Colombia"),
    CountryRecord::new("KM", "COM", "Comoros").official("Union of the Comoros"),
    CountryRecord::new("CV", "CPV", "Cabo Verde").official("Republic of Cabo Verde"),
    CountryRecord::new("CR", "CRI", "Costa Rica").official("Republic of Costa Rica"),
    CountryRecord::new("CU", "CUB", "Cuba").official("Republic of Cuba"),
    CountryRecord::new("CW", "CUW", "Curaçao"),
    CountryRecord::new("CX", "CXR", "Christmas Island"),
    CountryRecord::new("KY", "CYM", "Cayman Islands"),
    CountryRecord::new("CY", "CYP", "Cyprus").official("Republic of Cyprus"),
    CountryRecord::new("CZ", "CZE", "Czechia").official("Czech Republic"),
    CountryRecord::new("DE", "DEU", "Germany").official("Federal Republic of Germany"),
    CountryRecord::new("DJ", "DJI", "Djibouti").official("Republic of Djibouti"),
    CountryRecord::new("DM", "DMA", "Dominica").official("Commonwealth of Dominica"),
    CountryRecord::new("DK", "DNK", "Denmark").official("Kingdom of Denmark"),
    CountryRecord::new("DO", "DOM", "Dominican Republic"),
    CountryRecord::new("DZ", "DZA", "Algeria").official("People's Democratic Republic of Algeria"),
    CountryRecord::new("EC", "ECU", "Ecuador").official("Republic of Ecuador"),
    CountryRecord::new("EG", "EGY", "Egypt").official("Arab Republic of Egypt"),
    CountryRecord::new("ER", "ERI", "Eritrea").official("the State of Eritrea"),
    CountryRecord::new("EH", "ESH", "Western Sahara"),
    CountryRecord::new("ES", "ESP", "Spain").official("Kingdom of Spain"),
    CountryRecord::new("EE", "EST", "Estonia").official("Republic of Estonia"),
    CountryRecord::new("ET", "ETH", "Ethiopia").official("Federal Democratic Republic of Ethiopia"),
    CountryRecord::new("FI", "FIN", "Finland").official("Republic of Finland"),
    CountryRecord::new("FJ", "FJI", "Fiji").official("Republic of Fiji"),
    CountryRecord::new("FK", "FLK", "Falkland Islands (Malvinas)"),
    CountryRecord::new("FR", "FRA", "France").official("French Republic"),
    CountryRecord::new("FO", "FRO", "Faroe Islands"),
    CountryRecord::new("FM", "FSM", "Micronesia, Federated States of").official("Federated States of Micronesia"),
    CountryRecord::new("GA", "GAB", "Gabon").official("Gabonese Republic"),
    CountryRecord::new("GB", "GBR", "United Kingdom")
        .official("United Kingdom of Great Britain and Northern Ireland"),
    CountryRecord::new("GE", "GEO", "Georgia"),
    CountryRecord::new("GG", "GGY", "Guernsey"),
    CountryRecord::new("GH", "GHA", "Ghana").official("Republic of Ghana"),
    CountryRecord::new("GI", "GIB", "Gibraltar"),
    CountryRecord::new("GN", "GIN", "Guinea").official("Republic of Guinea"),
    CountryRecord::new("GP", "GLP", "Guadeloupe"),
    CountryRecord::new("GM", "GMB", "Gambia").official("Republic of the Gambia"),
    CountryRecord::new("GW", "GNB", "Guinea-Bissau").official("Republic of Guinea-Bissau"),
    CountryRecord::new("GQ", "GNQ", "Equatorial Guinea").official("Republic of Equatorial Guinea"),
    CountryRecord::new("GR", "GRC", "Greece").official("Hellenic Republic"),
    CountryRecord::new("GD", "GRD", "Grenada"),
    CountryRecord::new("GL", "GRL", "Greenland"),
    CountryRecord::new("GT", "GTM", "Guatemala").official("Republic of Guatemala"),
    CountryRecord::new("GF", "GUF", "French Guiana"),
    CountryRecord::new("GU", "GUM", "Guam"),
    CountryRecord::new("GY", "GUY", "Guyana").official("Republic of Guyana"),
    CountryRecord::new("HK", "HKG", "Hong Kong").official("Hong Kong Special Administrative Region of China"),
    CountryRecord::new("HM", "HMD", "Heard Island and McDonald Islands"),
    CountryRecord::new("HN", "HND", "Honduras").official("Republic of Honduras"),
    CountryRecord::new("HR", "HRV", "Croatia").official("Republic of Croatia"),
    CountryRecord::new("HT", "HTI", "Haiti").official("Republic of Haiti"),
    CountryRecord::new("HU", "HUN", "Hungary"),
    CountryRecord::new("ID", "IDN", "Indonesia").official("Republic of Indonesia"),
    CountryRecord::new("IM", "IMN", "Isle of Man"),
    CountryRecord::new("IN", "IND", "India").official("Republic of India"),
    CountryRecord::new("IO", "IOT", "British Indian Ocean Territory"),
    CountryRecord::new("IE", "IRL", "Ireland"),
    CountryRecord::new("IR", "IRN", "Iran, Islamic Republic of")
        .official("Islamic Republic of Iran")
        .common("Iran"),
    CountryRecord::new("IQ", "IRQ", "Iraq").official("Republic of Iraq"),
    CountryRecord::new("IS", "ISL", "Iceland").official("Republic of Iceland"),
    CountryRecord::new("IL", "ISR", "Israel").official("State of Israel"),
    CountryRecord::new("IT", "ITA", "Italy").official("Italian Republic"),
    CountryRecord::new("JM", "JAM", "Jamaica"),
    CountryRecord::new("JE", "JEY", "Jersey"),
    CountryRecord::new("JO", "JOR", "Jordan").official("Hashemite Kingdom of Jordan"),
    CountryRecord::new("JP", "JPN", "Japan"),
    CountryRecord::new("KZ", "KAZ", "Kazakhstan").official("Republic of Kazakhstan"),
    CountryRecord::new("KE", "KEN", "Kenya").official("Republic of Kenya"),
    CountryRecord::new("KG", "KGZ", "Kyrgyzstan").official("Kyrgyz Republic"),
    CountryRecord::new("KH", "KHM", "Cambodia").official("Kingdom of Cambodia"),
    CountryRecord::new("KI", "KIR", "Kiribati").official("Republic of Kiribati"),
    CountryRecord::new("KN", "KNA", "Saint Kitts and Nevis"),
    CountryRecord::new("KR", "KOR", "Korea, Republic of").common("South Korea"),
    CountryRecord::new("KW", "KWT", "Kuwait").official("State of Kuwait"),
    CountryRecord::new("LA", "LAO", "Lao People's Democratic Republic").common("Laos"),
    CountryRecord::new("LB", "LBN", "Lebanon").official("Lebanese Republic"),
    CountryRecord::new("LR", "LBR", "Liberia").official("Republic of Liberia"),
    CountryRecord::new("LY", "LBY", "Libya"),
    CountryRecord::new("LC", "LCA", "Saint Lucia"),
    CountryRecord::new("LI", "LIE", "Liechtenstein").official("Principality of Liechtenstein"),
    CountryRecord::new("LK", "LKA", "Sri Lanka").official("Democratic Socialist Republic of Sri Lanka"),
    CountryRecord::new("LS", "LSO", "Lesotho").official("Kingdom of Lesotho"),
    CountryRecord::new("LT", "LTU", "Lithuania").official("Republic of Lithuania"),
    CountryRecord::new("LU", "LUX", "Luxembourg").official("Grand Duchy of Luxembourg"),
    CountryRecord::new("LV", "LVA", "Latvia").official("Republic of Latvia"),
    CountryRecord::new("MO", "MAC", "Macao").official("Macao Special Administrative Region of China"),
    CountryRecord::new("MF", "MAF", "Saint Martin (French part)"),
    CountryRecord::new("MA", "MAR", "Morocco").official("Kingdom of Morocco"),
    CountryRecord::new("MC", "MCO", "Monaco").official("Principality of Monaco"),
    CountryRecord::new("MD", "MDA", "Moldova, Republic of")
        .official("Republic of Moldova")
        .common("Moldova"),
    CountryRecord::new("MG", "MDG", "Madagascar").official("Republic of Madagascar"),
    CountryRecord::new("MV", "MDV", "Maldives").official("Republic of Maldives"),
    CountryRecord::new("MX", "MEX", "Mexico").official("United Mexican States"),
    CountryRecord::new("MH", "MHL", "Marshall Islands").official("Republic of the Marshall Islands"),
    CountryRecord::new("MK", "MKD", "North Macedonia").official("Republic of North Macedonia"),
    CountryRecord::new("ML", "MLI", "Mali").official("Republic of Mali"),
    CountryRecord::new("MT", "MLT", "Malta").official("Republic of Malta"),
    CountryRecord::new("MM", "MMR", "Myanmar").official("Republic of Myanmar"),
    CountryRecord::new("ME", "MNE", "Montenegro"),
    CountryRecord::new("MN", "MNG", "Mongolia"),
    CountryRecord::new("MP", "MNP", "Northern Mariana Islands")
        .official("Commonwealth of the Northern Mariana Islands"),
    CountryRecord::new("MZ", "MOZ", "Mozambique").official("Republic of Mozambique"),
    CountryRecord::new("MR", "MRT", "Mauritania").official("Islamic Republic of Mauritania"),
    CountryRecord::new("MS", "MSR", "Montserrat"),
    CountryRecord::new("MQ", "MTQ", "Martinique"),
    CountryRecord::new("MU", "MUS", "Mauritius").official("Republic of Mauritius"),
    CountryRecord::new("MW", "MWI", "Malawi").official("Republic of Malawi"),
    CountryRecord::new("MY", "MYS", "Malaysia"),
    CountryRecord::new("YT", "MYT", "Mayotte"),
    CountryRecord::new("NA", "NAM", "Namibia").official("Republic of Namibia"),
    CountryRecord::new("NC", "NCL", "New Caledonia"),
    CountryRecord::new("NE", "NER", "Niger").official("Republic of the Niger"),
    CountryRecord::new("NF", "NFK", "Norfolk Island"),
    CountryRecord::new("NG", "NGA", "Nigeria").official("Federal Republic of Nigeria"),
    CountryRecord::new("NI", "NIC", "Nicaragua").official("Republic of Nicaragua"),
    CountryRecord::new("NU", "NIU", "Niue"),
    CountryRecord::new("NL", "NLD", "Netherlands").official("Kingdom of the Netherlands"),
    CountryRecord::new("NO", "NOR", "Norway").official("Kingdom of Norway"),
    CountryRecord::new("NP", "NPL", "Nepal").official("Federal Democratic Republic of Nepal"),
    CountryRecord::new("NR", "NRU", "Nauru").official("Republic of Nauru"),
    CountryRecord::new("NZ", "NZL", "New Zealand"),
    CountryRecord::new("OM", "OMN", "Oman").official("Sultanate of Oman"),
    CountryRecord::new("PK", "PAK", "Pakistan").official("Islamic Republic of Pakistan"),
    CountryRecord::new("PA", "PAN", "Panama").official("Republic of Panama"),
    CountryRecord::new("PN", "PCN", "Pitcairn"),
    CountryRecord::new("PE", "PER", "Peru").official("Republic of Peru"),
    CountryRecord::new("PH", "PHL", "Philippines").official("Republic of the Philippines"),
    CountryRecord::new("PW", "PLW", "Palau").official("Republic of Palau"),
    CountryRecord::new("PG", "PNG", "Papua New Guinea").official("Independent State of Papua New Guinea"),
    CountryRecord::new("PL", "POL", "Poland").official("Republic of Poland"),
    CountryRecord::new("PR", "PRI", "Puerto Rico"),
    CountryRecord::new("KP", "PRK", "Korea, Democratic People's Republic of")
        .official("Democratic People's Republic of Korea")
        .common("North Korea"),
    CountryRecord::new("PT", "PRT", "Portugal").official("Portuguese Republic"),
    CountryRecord::new("PY", "PRY", "Paraguay").official("Republic of Paraguay"),
    CountryRecord::new("PS", "PSE", "Palestine, State of").official("the State of Palestine"),
    CountryRecord::new("PF", "PYF", "French Polynesia"),
    CountryRecord::new("QA", "QAT", "Qatar").official("State of Qatar"),
    CountryRecord::new("RE", "REU", "Réunion"),
    CountryRecord::new("RO", "ROU", "Romania"),
    CountryRecord::new("RU", "RUS", "Russian Federation"),
    CountryRecord::new("RW", "RWA", "Rwanda").official("Rwandese Republic"),
    CountryRecord::new("SA", "SAU", "Saudi Arabia").official("Kingdom of Saudi Arabia"),
    CountryRecord::new("SD", "SDN", "Sudan").official("Republic of the Sudan"),
    CountryRecord::new("SN", "SEN", "Senegal").official("Republic of Senegal"),
    CountryRecord::new("SG", "SGP", "Singapore").official("Republic of Singapore"),
    CountryRecord::new("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    CountryRecord::new("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    CountryRecord::new("SJ", "SJM", "Svalbard and Jan Mayen"),
    CountryRecord::new("SB", "SLB", "Solomon Islands"),
    CountryRecord::new("SL", "SLE", "Sierra Leone").official("Republic of Sierra Leone"),
    CountryRecord::new("SV", "SLV", "El Salvador").official("Republic of El Salvador"),
    CountryRecord::new("SM", "SMR", "San Marino").official("Republic of San Marino"),
    CountryRecord::new("SO", "SOM", "Somalia").official("Federal Republic of Somalia"),
    CountryRecord::new("PM", "SPM", "Saint Pierre and Miquelon"),
    CountryRecord::new("RS", "SRB", "Serbia").official("Republic of Serbia"),
    CountryRecord::new("SS", "SSD", "South Sudan").official("Republic of South Sudan"),
    CountryRecord::new("ST", "STP", "Sao Tome and Principe")
        .official("Democratic Republic of Sao Tome and Principe"),
    CountryRecord::new("SR", "SUR", "Suriname").official("Republic of Suriname"),
    CountryRecord::new("SK", "SVK", "Slovakia").official("Slovak Republic"),
    CountryRecord::new("SI", "SVN", "Slovenia").official("Republic of Slovenia"),
    CountryRecord::new("SE", "SWE", "Sweden").official("Kingdom of Sweden"),
    CountryRecord::new("SZ", "SWZ", "Eswatini").official("Kingdom of Eswatini"),
    CountryRecord::new("SX", "SXM", "Sint Maarten (Dutch part)"),
    CountryRecord::new("SC", "SYC", "Seychelles").official("Republic of Seychelles"),
    CountryRecord::new("SY", "SYR", "Syrian Arab Republic").common("Syria"),
    CountryRecord::new("TC", "TCA", "Turks and Caicos Islands"),
    CountryRecord::new("TD", "TCD", "Chad").official("Republic of Chad"),
    CountryRecord::new("TG", "TGO", "Togo").official("Togolese Republic"),
    CountryRecord::new("TH", "THA", "Thailand").official("Kingdom of Thailand"),
    CountryRecord::new("TJ", "TJK", "Tajikistan").official("Republic of Tajikistan"),
    CountryRecord::new("TK", "TKL", "Tokelau"),
    CountryRecord::new("TM", "TKM", "Turkmenistan"),
    CountryRecord::new("TL", "TLS", "Timor-Leste").official("Democratic Republic of Timor-Leste"),
    CountryRecord::new("TO", "TON", "Tonga").official("Kingdom of Tonga"),
    CountryRecord::new("TT", "TTO", "Trinidad and Tobago").official("Republic of Trinidad and Tobago"),
    CountryRecord::new("TN", "TUN", "Tunisia").official("Republic of Tunisia"),
    CountryRecord::new("TR", "TUR", "Türkiye").official("Republic of Türkiye"),
    CountryRecord::new("TV", "TUV", "Tuvalu"),
    CountryRecord::new("TW", "TWN", "Taiwan, Province of China")
        .official("Taiwan, Province of China")
        .common("Taiwan"),
    CountryRecord::new("TZ", "TZA", "Tanzania, United Republic of")
        .official("United Republic of Tanzania")
        .common("Tanzania"),
    CountryRecord::new("UG", "UGA", "Uganda").official("Republic of Uganda"),
    CountryRecord::new("UA", "UKR", "Ukraine"),
    CountryRecord::new("UM", "UMI", "United States Minor Outlying Islands"),
    CountryRecord::new("UY", "URY", "Uruguay").official("Eastern Republic of Uruguay"),
    CountryRecord::new("US", "USA", "United States").official("United States of America"),
    CountryRecord::new("UZ", "UZB", "Uzbekistan").official("Republic of Uzbekistan"),
    CountryRecord::new("VA", "VAT", "Holy See (Vatican City State)"),
    CountryRecord::new("VC", "VCT", "Saint Vincent and the Grenadines"),
    CountryRecord::new("VE", "VEN", "Venezuela, Bolivarian Republic of")
        .official("Bolivarian Republic of Venezuela")
        .common("Venezuela"),
    CountryRecord::new("VG", "VGB", "Virgin Islands, British").official("British Virgin Islands"),
    CountryRecord::new("VI", "VIR", "Virgin Islands, U.S.").official("Virgin Islands of the United States"),
    CountryRecord::new("VN", "VNM", "Viet Nam")
        .official("Socialist Republic of Viet Nam")
        .common("Vietnam"),
    CountryRecord::new("VU", "VUT", "Vanuatu").official("Republic of Vanuatu"),
    CountryRecord::new("WF", "WLF", "Wallis and Futuna"),
    CountryRecord::new("WS", "WSM", "Samoa").official("Independent State of Samoa"),
    CountryRecord::new("YE", "YEM", "Yemen").official("Republic of Yemen"),
    CountryRecord::new("ZA", "ZAF", "South Africa").official("Republic of South Africa"),
    CountryRecord::new("ZM", "ZMB", "Zambia").official("Republic of Zambia"),
    CountryRecord::new("ZW", "ZWE", "Zimbabwe").official("Republic of Zimbabwe"),
];
