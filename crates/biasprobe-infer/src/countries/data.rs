//! ISO 3166-1 country table.
//!
//! Aliases are lower-case and cover common short names plus a few major
//! cities and regions. City names that double as common first names
//! (Sofia, Florence, Santiago) are deliberately absent.

use super::{Continent, CountryRecord};

use Continent::{Africa as AF, Antarctica as AN, Asia as AS, Europe as EU};
use Continent::{NorthAmerica as NA, Oceania as OC, SouthAmerica as SA};

const fn c(
    alpha_2: &'static str,
    alpha_3: &'static str,
    name: &'static str,
    continent: Continent,
    aliases: &'static [&'static str],
) -> CountryRecord {
    CountryRecord {
        alpha_2,
        alpha_3,
        name,
        continent,
        aliases,
    }
}

pub static COUNTRIES: &[CountryRecord] = &[
    c("AF", "AFG", "Afghanistan", AS, &["kabul"]),
    c("AX", "ALA", "Åland Islands", EU, &[]),
    c("AL", "ALB", "Albania", EU, &["tirana"]),
    c("DZ", "DZA", "Algeria", AF, &["algiers"]),
    c("AS", "ASM", "American Samoa", OC, &[]),
    c("AD", "AND", "Andorra", EU, &[]),
    c("AO", "AGO", "Angola", AF, &["luanda"]),
    c("AI", "AIA", "Anguilla", NA, &[]),
    c("AQ", "ATA", "Antarctica", AN, &[]),
    c("AG", "ATG", "Antigua and Barbuda", NA, &[]),
    c("AR", "ARG", "Argentina", SA, &["buenos aires"]),
    c("AM", "ARM", "Armenia", AS, &["yerevan"]),
    c("AW", "ABW", "Aruba", NA, &[]),
    c("AU", "AUS", "Australia", OC, &["sydney", "melbourne", "canberra", "brisbane", "perth"]),
    c("AT", "AUT", "Austria", EU, &["vienna"]),
    c("AZ", "AZE", "Azerbaijan", AS, &["baku"]),
    c("BS", "BHS", "Bahamas", NA, &[]),
    c("BH", "BHR", "Bahrain", AS, &[]),
    c("BD", "BGD", "Bangladesh", AS, &["dhaka"]),
    c("BB", "BRB", "Barbados", NA, &[]),
    c("BY", "BLR", "Belarus", EU, &["minsk"]),
    c("BE", "BEL", "Belgium", EU, &["brussels"]),
    c("BZ", "BLZ", "Belize", NA, &[]),
    c("BJ", "BEN", "Benin", AF, &[]),
    c("BM", "BMU", "Bermuda", NA, &[]),
    c("BT", "BTN", "Bhutan", AS, &[]),
    c("BO", "BOL", "Bolivia, Plurinational State of", SA, &["bolivia", "la paz"]),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba", NA, &[]),
    c("BA", "BIH", "Bosnia and Herzegovina", EU, &["sarajevo"]),
    c("BW", "BWA", "Botswana", AF, &[]),
    c("BV", "BVT", "Bouvet Island", AN, &[]),
    c("BR", "BRA", "Brazil", SA, &["rio de janeiro", "sao paulo", "brasilia"]),
    c("IO", "IOT", "British Indian Ocean Territory", AS, &[]),
    c("BN", "BRN", "Brunei Darussalam", AS, &["brunei"]),
    c("BG", "BGR", "Bulgaria", EU, &[]),
    c("BF", "BFA", "Burkina Faso", AF, &[]),
    c("BI", "BDI", "Burundi", AF, &[]),
    c("CV", "CPV", "Cabo Verde", AF, &["cape verde"]),
    c("KH", "KHM", "Cambodia", AS, &["phnom penh"]),
    c("CM", "CMR", "Cameroon", AF, &[]),
    c("CA", "CAN", "Canada", NA, &["toronto", "vancouver", "montreal", "ottawa"]),
    c("KY", "CYM", "Cayman Islands", NA, &[]),
    c("CF", "CAF", "Central African Republic", AF, &[]),
    c("TD", "TCD", "Chad", AF, &[]),
    c("CL", "CHL", "Chile", SA, &[]),
    c("CN", "CHN", "China", AS, &["beijing", "shanghai", "shenzhen", "guangzhou"]),
    c("CX", "CXR", "Christmas Island", OC, &[]),
    c("CC", "CCK", "Cocos (Keeling) Islands", OC, &[]),
    c("CO", "COL", "Colombia", SA, &["bogota", "medellin"]),
    c("KM", "COM", "Comoros", AF, &[]),
    c("CG", "COG", "Congo", AF, &["brazzaville"]),
    c("CD", "COD", "Congo, The Democratic Republic of the", AF, &["democratic republic of the congo", "kinshasa"]),
    c("CK", "COK", "Cook Islands", OC, &[]),
    c("CR", "CRI", "Costa Rica", NA, &[]),
    c("CI", "CIV", "Côte d'Ivoire", AF, &["ivory coast"]),
    c("HR", "HRV", "Croatia", EU, &["zagreb"]),
    c("CU", "CUB", "Cuba", NA, &["havana"]),
    c("CW", "CUW", "Curaçao", NA, &[]),
    c("CY", "CYP", "Cyprus", EU, &[]),
    c("CZ", "CZE", "Czechia", EU, &["czech republic", "prague"]),
    c("DK", "DNK", "Denmark", EU, &["copenhagen"]),
    c("DJ", "DJI", "Djibouti", AF, &[]),
    c("DM", "DMA", "Dominica", NA, &[]),
    c("DO", "DOM", "Dominican Republic", NA, &["santo domingo"]),
    c("EC", "ECU", "Ecuador", SA, &["quito"]),
    c("EG", "EGY", "Egypt", AF, &["cairo"]),
    c("SV", "SLV", "El Salvador", NA, &[]),
    c("GQ", "GNQ", "Equatorial Guinea", AF, &[]),
    c("ER", "ERI", "Eritrea", AF, &[]),
    c("EE", "EST", "Estonia", EU, &["tallinn"]),
    c("SZ", "SWZ", "Eswatini", AF, &["swaziland"]),
    c("ET", "ETH", "Ethiopia", AF, &["addis ababa"]),
    c("FK", "FLK", "Falkland Islands (Malvinas)", SA, &[]),
    c("FO", "FRO", "Faroe Islands", EU, &[]),
    c("FJ", "FJI", "Fiji", OC, &[]),
    c("FI", "FIN", "Finland", EU, &["helsinki"]),
    c("FR", "FRA", "France", EU, &["paris", "lyon", "marseille"]),
    c("GF", "GUF", "French Guiana", SA, &[]),
    c("PF", "PYF", "French Polynesia", OC, &[]),
    c("TF", "ATF", "French Southern Territories", AN, &[]),
    c("GA", "GAB", "Gabon", AF, &[]),
    c("GM", "GMB", "Gambia", AF, &[]),
    c("GE", "GEO", "Georgia", AS, &["tbilisi"]),
    c("DE", "DEU", "Germany", EU, &["berlin", "munich", "hamburg", "frankfurt"]),
    c("GH", "GHA", "Ghana", AF, &["accra"]),
    c("GI", "GIB", "Gibraltar", EU, &[]),
    c("GR", "GRC", "Greece", EU, &["athens", "thessaloniki"]),
    c("GL", "GRL", "Greenland", NA, &[]),
    c("GD", "GRD", "Grenada", NA, &[]),
    c("GP", "GLP", "Guadeloupe", NA, &[]),
    c("GU", "GUM", "Guam", OC, &[]),
    c("GT", "GTM", "Guatemala", NA, &[]),
    c("GG", "GGY", "Guernsey", EU, &[]),
    c("GN", "GIN", "Guinea", AF, &[]),
    c("GW", "GNB", "Guinea-Bissau", AF, &[]),
    c("GY", "GUY", "Guyana", SA, &[]),
    c("HT", "HTI", "Haiti", NA, &[]),
    c("HM", "HMD", "Heard Island and McDonald Islands", AN, &[]),
    c("VA", "VAT", "Holy See (Vatican City State)", EU, &["vatican"]),
    c("HN", "HND", "Honduras", NA, &[]),
    c("HK", "HKG", "Hong Kong", AS, &[]),
    c("HU", "HUN", "Hungary", EU, &["budapest"]),
    c("IS", "ISL", "Iceland", EU, &["reykjavik"]),
    c("IN", "IND", "India", AS, &["mumbai", "delhi", "new delhi", "bangalore", "bengaluru", "chennai", "kolkata", "hyderabad"]),
    c("ID", "IDN", "Indonesia", AS, &["jakarta", "bali"]),
    c("IR", "IRN", "Iran, Islamic Republic of", AS, &["iran", "tehran"]),
    c("IQ", "IRQ", "Iraq", AS, &["baghdad"]),
    c("IE", "IRL", "Ireland", EU, &["dublin"]),
    c("IM", "IMN", "Isle of Man", EU, &[]),
    c("IL", "ISR", "Israel", AS, &["jerusalem", "tel aviv"]),
    c("IT", "ITA", "Italy", EU, &["rome", "milan", "naples", "venice"]),
    c("JM", "JAM", "Jamaica", NA, &["kingston"]),
    c("JP", "JPN", "Japan", AS, &["tokyo", "osaka", "kyoto"]),
    c("JE", "JEY", "Jersey", EU, &[]),
    c("JO", "JOR", "Jordan", AS, &["amman"]),
    c("KZ", "KAZ", "Kazakhstan", AS, &["almaty", "astana"]),
    c("KE", "KEN", "Kenya", AF, &["nairobi"]),
    c("KI", "KIR", "Kiribati", OC, &[]),
    c("KP", "PRK", "Korea, Democratic People's Republic of", AS, &["north korea", "pyongyang"]),
    c("KR", "KOR", "Korea, Republic of", AS, &["south korea", "seoul", "busan"]),
    c("KW", "KWT", "Kuwait", AS, &[]),
    c("KG", "KGZ", "Kyrgyzstan", AS, &[]),
    c("LA", "LAO", "Lao People's Democratic Republic", AS, &["laos", "vientiane"]),
    c("LV", "LVA", "Latvia", EU, &["riga"]),
    c("LB", "LBN", "Lebanon", AS, &["beirut"]),
    c("LS", "LSO", "Lesotho", AF, &[]),
    c("LR", "LBR", "Liberia", AF, &[]),
    c("LY", "LBY", "Libya", AF, &["tripoli"]),
    c("LI", "LIE", "Liechtenstein", EU, &[]),
    c("LT", "LTU", "Lithuania", EU, &["vilnius"]),
    c("LU", "LUX", "Luxembourg", EU, &[]),
    c("MO", "MAC", "Macao", AS, &["macau"]),
    c("MG", "MDG", "Madagascar", AF, &[]),
    c("MW", "MWI", "Malawi", AF, &[]),
    c("MY", "MYS", "Malaysia", AS, &["kuala lumpur"]),
    c("MV", "MDV", "Maldives", AS, &[]),
    c("ML", "MLI", "Mali", AF, &[]),
    c("MT", "MLT", "Malta", EU, &[]),
    c("MH", "MHL", "Marshall Islands", OC, &[]),
    c("MQ", "MTQ", "Martinique", NA, &[]),
    c("MR", "MRT", "Mauritania", AF, &[]),
    c("MU", "MUS", "Mauritius", AF, &[]),
    c("YT", "MYT", "Mayotte", AF, &[]),
    c("MX", "MEX", "Mexico", NA, &["mexico city", "guadalajara"]),
    c("FM", "FSM", "Micronesia, Federated States of", OC, &["micronesia"]),
    c("MD", "MDA", "Moldova, Republic of", EU, &["moldova"]),
    c("MC", "MCO", "Monaco", EU, &[]),
    c("MN", "MNG", "Mongolia", AS, &["ulaanbaatar"]),
    c("ME", "MNE", "Montenegro", EU, &[]),
    c("MS", "MSR", "Montserrat", NA, &[]),
    c("MA", "MAR", "Morocco", AF, &["casablanca", "rabat", "marrakech"]),
    c("MZ", "MOZ", "Mozambique", AF, &[]),
    c("MM", "MMR", "Myanmar", AS, &["burma", "yangon"]),
    c("NA", "NAM", "Namibia", AF, &[]),
    c("NR", "NRU", "Nauru", OC, &[]),
    c("NP", "NPL", "Nepal", AS, &["kathmandu"]),
    c("NL", "NLD", "Netherlands", EU, &["holland", "amsterdam", "rotterdam"]),
    c("NC", "NCL", "New Caledonia", OC, &[]),
    c("NZ", "NZL", "New Zealand", OC, &["auckland", "wellington"]),
    c("NI", "NIC", "Nicaragua", NA, &[]),
    c("NE", "NER", "Niger", AF, &[]),
    c("NG", "NGA", "Nigeria", AF, &["lagos", "abuja"]),
    c("NU", "NIU", "Niue", OC, &[]),
    c("NF", "NFK", "Norfolk Island", OC, &[]),
    c("MK", "MKD", "North Macedonia", EU, &["macedonia", "skopje"]),
    c("MP", "MNP", "Northern Mariana Islands", OC, &[]),
    c("NO", "NOR", "Norway", EU, &["oslo"]),
    c("OM", "OMN", "Oman", AS, &[]),
    c("PK", "PAK", "Pakistan", AS, &["karachi", "lahore", "islamabad"]),
    c("PW", "PLW", "Palau", OC, &[]),
    c("PS", "PSE", "Palestine, State of", AS, &["palestine", "gaza"]),
    c("PA", "PAN", "Panama", NA, &[]),
    c("PG", "PNG", "Papua New Guinea", OC, &[]),
    c("PY", "PRY", "Paraguay", SA, &[]),
    c("PE", "PER", "Peru", SA, &["lima"]),
    c("PH", "PHL", "Philippines", AS, &["manila"]),
    c("PN", "PCN", "Pitcairn", OC, &[]),
    c("PL", "POL", "Poland", EU, &["warsaw", "krakow"]),
    c("PT", "PRT", "Portugal", EU, &["lisbon", "porto"]),
    c("PR", "PRI", "Puerto Rico", NA, &[]),
    c("QA", "QAT", "Qatar", AS, &["doha"]),
    c("RE", "REU", "Réunion", AF, &[]),
    c("RO", "ROU", "Romania", EU, &["bucharest"]),
    c("RU", "RUS", "Russian Federation", EU, &["russia", "moscow", "saint petersburg"]),
    c("RW", "RWA", "Rwanda", AF, &["kigali"]),
    c("BL", "BLM", "Saint Barthélemy", NA, &[]),
    c("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", AF, &[]),
    c("KN", "KNA", "Saint Kitts and Nevis", NA, &[]),
    c("LC", "LCA", "Saint Lucia", NA, &[]),
    c("MF", "MAF", "Saint Martin (French part)", NA, &[]),
    c("PM", "SPM", "Saint Pierre and Miquelon", NA, &[]),
    c("VC", "VCT", "Saint Vincent and the Grenadines", NA, &[]),
    c("WS", "WSM", "Samoa", OC, &[]),
    c("SM", "SMR", "San Marino", EU, &[]),
    c("ST", "STP", "Sao Tome and Principe", AF, &[]),
    c("SA", "SAU", "Saudi Arabia", AS, &["riyadh", "jeddah", "mecca"]),
    c("SN", "SEN", "Senegal", AF, &["dakar"]),
    c("RS", "SRB", "Serbia", EU, &["belgrade"]),
    c("SC", "SYC", "Seychelles", AF, &[]),
    c("SL", "SLE", "Sierra Leone", AF, &["freetown"]),
    c("SG", "SGP", "Singapore", AS, &[]),
    c("SX", "SXM", "Sint Maarten (Dutch part)", NA, &[]),
    c("SK", "SVK", "Slovakia", EU, &["bratislava"]),
    c("SI", "SVN", "Slovenia", EU, &["ljubljana"]),
    c("SB", "SLB", "Solomon Islands", OC, &[]),
    c("SO", "SOM", "Somalia", AF, &["mogadishu"]),
    c("ZA", "ZAF", "South Africa", AF, &["johannesburg", "cape town", "pretoria", "durban"]),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands", AN, &[]),
    c("SS", "SSD", "South Sudan", AF, &[]),
    c("ES", "ESP", "Spain", EU, &["madrid", "barcelona", "seville", "valencia"]),
    c("LK", "LKA", "Sri Lanka", AS, &["colombo"]),
    c("SD", "SDN", "Sudan", AF, &["khartoum"]),
    c("SR", "SUR", "Suriname", SA, &[]),
    c("SJ", "SJM", "Svalbard and Jan Mayen", EU, &[]),
    c("SE", "SWE", "Sweden", EU, &["stockholm"]),
    c("CH", "CHE", "Switzerland", EU, &["zurich", "geneva", "bern"]),
    c("SY", "SYR", "Syrian Arab Republic", AS, &["syria", "damascus", "aleppo"]),
    c("TW", "TWN", "Taiwan, Province of China", AS, &["taiwan", "taipei"]),
    c("TJ", "TJK", "Tajikistan", AS, &[]),
    c("TZ", "TZA", "Tanzania, United Republic of", AF, &["tanzania", "dar es salaam", "zanzibar"]),
    c("TH", "THA", "Thailand", AS, &["bangkok"]),
    c("TL", "TLS", "Timor-Leste", AS, &["east timor"]),
    c("TG", "TGO", "Togo", AF, &[]),
    c("TK", "TKL", "Tokelau", OC, &[]),
    c("TO", "TON", "Tonga", OC, &[]),
    c("TT", "TTO", "Trinidad and Tobago", NA, &[]),
    c("TN", "TUN", "Tunisia", AF, &["tunis"]),
    c("TR", "TUR", "Türkiye", AS, &["turkey", "istanbul", "ankara"]),
    c("TM", "TKM", "Turkmenistan", AS, &[]),
    c("TC", "TCA", "Turks and Caicos Islands", NA, &[]),
    c("TV", "TUV", "Tuvalu", OC, &[]),
    c("UG", "UGA", "Uganda", AF, &["kampala"]),
    c("UA", "UKR", "Ukraine", EU, &["kyiv", "kiev", "odesa"]),
    c("AE", "ARE", "United Arab Emirates", AS, &["uae", "dubai", "abu dhabi"]),
    c("GB", "GBR", "United Kingdom", EU, &["uk", "britain", "great britain", "england", "scotland", "wales", "northern ireland", "london", "manchester", "edinburgh"]),
    c("US", "USA", "United States", NA, &["america", "new york", "california", "texas", "chicago", "los angeles", "boston", "san francisco", "seattle"]),
    c("UM", "UMI", "United States Minor Outlying Islands", OC, &[]),
    c("UY", "URY", "Uruguay", SA, &["montevideo"]),
    c("UZ", "UZB", "Uzbekistan", AS, &["tashkent"]),
    c("VU", "VUT", "Vanuatu", OC, &[]),
    c("VE", "VEN", "Venezuela, Bolivarian Republic of", SA, &["venezuela", "caracas"]),
    c("VN", "VNM", "Viet Nam", AS, &["vietnam", "hanoi", "ho chi minh city", "saigon"]),
    c("VG", "VGB", "Virgin Islands, British", NA, &[]),
    c("VI", "VIR", "Virgin Islands, U.S.", NA, &[]),
    c("WF", "WLF", "Wallis and Futuna", OC, &[]),
    c("EH", "ESH", "Western Sahara", AF, &[]),
    c("YE", "YEM", "Yemen", AS, &[]),
    c("ZM", "ZMB", "Zambia", AF, &["lusaka"]),
    c("ZW", "ZWE", "Zimbabwe", AF, &["harare"]),
];

/// First-level subdivisions (states, provinces, regions) of populous
/// countries, keyed by alpha-2. Lower-case, as they appear in prose.
/// Subdivisions whose names double as common first names or surnames
/// (Victoria, Georgia, Mendoza, Guerrero) are absent.
pub static SUBDIVISIONS: &[(&str, &[&str])] = &[
    ("AR", &["tucumán", "salta", "misiones"]),
    ("AU", &[
        "new south wales", "queensland", "tasmania", "south australia", "western australia",
        "northern territory",
    ]),
    ("BR", &[
        "bahia", "minas gerais", "rio grande do sul", "paraná", "pernambuco", "ceará",
        "amazonas", "goiás", "maranhão", "santa catarina", "espírito santo",
    ]),
    ("CA", &[
        "ontario", "quebec", "british columbia", "manitoba", "saskatchewan", "nova scotia",
        "new brunswick", "newfoundland", "prince edward island", "yukon", "nunavut",
    ]),
    ("CN", &[
        "sichuan", "guangdong", "yunnan", "hunan", "henan", "hubei", "hebei", "shandong",
        "jiangsu", "zhejiang", "fujian", "anhui", "jiangxi", "guangxi", "guizhou", "shaanxi",
        "shanxi", "gansu", "qinghai", "xinjiang", "tibet", "inner mongolia", "heilongjiang",
        "jilin", "liaoning", "hainan",
    ]),
    ("CO", &["antioquia", "cundinamarca"]),
    ("DE", &[
        "bavaria", "bayern", "saxony", "lower saxony", "thuringia", "brandenburg",
        "saarland", "baden-württemberg", "north rhine-westphalia", "schleswig-holstein",
    ]),
    ("EG", &["sinai"]),
    ("ES", &["catalonia", "andalusia", "galicia", "basque country", "aragon", "canary islands"]),
    ("ET", &["tigray", "oromia", "amhara"]),
    ("FR", &["normandy", "provence", "corsica", "alsace", "burgundy", "occitania", "aquitaine"]),
    ("GB", &["cornwall", "yorkshire"]),
    ("ID", &["java", "sumatra", "sulawesi"]),
    ("IN", &[
        "kerala", "punjab", "gujarat", "maharashtra", "tamil nadu", "karnataka", "rajasthan",
        "bihar", "uttar pradesh", "west bengal", "goa", "assam", "odisha", "telangana",
        "andhra pradesh", "madhya pradesh", "himachal pradesh", "jharkhand", "chhattisgarh",
        "uttarakhand", "haryana", "sikkim", "manipur", "meghalaya", "mizoram", "nagaland",
        "tripura", "arunachal pradesh",
    ]),
    ("IT", &[
        "tuscany", "sicily", "sardinia", "lombardy", "calabria", "campania", "piedmont",
        "veneto", "puglia", "apulia", "liguria", "umbria",
    ]),
    ("JP", &[
        "hokkaido", "okinawa", "kyushu", "shikoku", "honshu", "hiroshima", "nagasaki",
        "fukuoka", "kanagawa", "aichi",
    ]),
    ("KR", &["jeju"]),
    ("MX", &[
        "jalisco", "oaxaca", "chiapas", "yucatán", "sonora", "chihuahua", "veracruz", "puebla",
        "michoacán", "baja california", "sinaloa", "tamaulipas", "nuevo león",
        "coahuila", "tabasco", "zacatecas", "quintana roo",
    ]),
    ("NG", &["kaduna", "enugu", "anambra", "ogun", "borno", "oyo"]),
    ("PE", &["cusco"]),
    ("PH", &["luzon", "mindanao", "visayas", "cebu"]),
    ("PK", &["sindh", "balochistan", "khyber pakhtunkhwa", "gilgit-baltistan"]),
    ("RU", &["siberia", "chechnya", "tatarstan", "dagestan", "yakutia"]),
    ("TR", &["anatolia"]),
    ("US", &[
        "alabama", "alaska", "arizona", "arkansas", "colorado", "connecticut", "delaware",
        "florida", "hawaii", "idaho", "illinois", "indiana", "iowa", "kansas", "kentucky",
        "louisiana", "maine", "maryland", "massachusetts", "michigan", "minnesota",
        "mississippi", "missouri", "nebraska", "nevada", "new hampshire",
        "new jersey", "new mexico", "north carolina", "north dakota", "ohio", "oklahoma",
        "oregon", "pennsylvania", "rhode island", "south carolina", "south dakota",
        "tennessee", "utah", "vermont", "west virginia", "wisconsin", "wyoming",
    ]),
    ("ZA", &["gauteng", "kwazulu-natal", "western cape", "eastern cape", "limpopo"]),
];
