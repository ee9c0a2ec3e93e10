//! Embedded baseline: 2024 presidential votes by state, plus the state code table.

/// (name, Republican, Democrat, Third) for the 50 states and DC.
pub(super) const ELECTION_2024: [(&str, u64, u64, u64); 51] = [
    ("Alabama",               1462616,   772412,   30062),
    ("Alaska",                 184458,   140026,   13693),
    ("Arizona",               1770242,  1582860,   37059),
    ("Arkansas",               759241,   396905,   26530),
    ("California",            6081697,  9276179,  507599),
    ("Colorado",              1377441,  1728159,   87145),
    ("Connecticut",            736918,   992053,   30039),
    ("Delaware",               214351,   289758,    8803),
    ("District of Columbia",    21076,   294185,   10608),
    ("Florida",               6110125,  4683038,  100589),
    ("Georgia",               2663117,  2548017,   39771),
    ("Hawaii",                 193661,   313044,    9996),
    ("Idaho",                  605246,   274972,   24839),
    ("Illinois",              2449079,  3062863,  121368),
    ("Indiana",               1720347,  1163603,   52727),
    ("Iowa",                   927019,   707278,   29209),
    ("Kansas",                 758802,   544853,   23936),
    ("Kentucky",              1337494,   704043,   32993),
    ("Louisiana",             1208505,   766870,   31600),
    ("Maine",                  377977,   435652,   17746),
    ("Maryland",              1035550,  1902577,  100207),
    ("Massachusetts",         1251303,  2126518,   95847),
    ("Michigan",              2816636,  2736533,  111017),
    ("Minnesota",             1519032,  1656979,   77909),
    ("Mississippi",            747744,   466668,   13596),
    ("Missouri",              1751986,  1200599,   42742),
    ("Montana",                352079,   231906,   19005),
    ("Nebraska",               564816,   369995,   17371),
    ("Nevada",                 751205,   705197,   28438),
    ("New Hampshire",          395523,   418488,   12178),
    ("New Jersey",            1968215,  2220713,   83797),
    ("New Mexico",             423391,   478802,   21210),
    ("New York",              3578899,  4619195,   64401),
    ("North Carolina",        2898423,  2715375,   85343),
    ("North Dakota",           246505,   112327,    9323),
    ("Ohio",                  3180116,  2533699,   53973),
    ("Oklahoma",              1036213,   499599,   30361),
    ("Oregon",                 919480,  1240600,   84413),
    ("Pennsylvania",          3543308,  3423042,   92382),
    ("Rhode Island",           214406,   285156,   13824),
    ("South Carolina",        1483747,  1028452,   35941),
    ("South Dakota",           272081,   146859,    9982),
    ("Tennessee",             1966865,  1056265,   40812),
    ("Texas",                 6393597,  4835250,  159827),
    ("Utah",                   883818,   562566,   42110),
    ("Vermont",                119395,   235791,   14236),
    ("Virginia",              2075085,  2335395,   95461),
    ("Washington",            1530923,  2245849,  147471),
    ("West Virginia",          533556,   214309,   14717),
    ("Wisconsin",             1697626,  1668229,   57063),
    ("Wyoming",                192633,    69527,    6888),
];

/// Region name to two-letter postal code.
pub(super) const REGION_CODES: [(&str, &str); 51] = [
    ("Alabama",              "AL"),
    ("Alaska",               "AK"),
    ("Arizona",              "AZ"),
    ("Arkansas",             "AR"),
    ("California",           "CA"),
    ("Colorado",             "CO"),
    ("Connecticut",          "CT"),
    ("Delaware",             "DE"),
    ("District of Columbia", "DC"),
    ("Florida",              "FL"),
    ("Georgia",              "GA"),
    ("Hawaii",               "HI"),
    ("Idaho",                "ID"),
    ("Illinois",             "IL"),
    ("Indiana",              "IN"),
    ("Iowa",                 "IA"),
    ("Kansas",               "KS"),
    ("Kentucky",             "KY"),
    ("Louisiana",            "LA"),
    ("Maine",                "ME"),
    ("Maryland",             "MD"),
    ("Massachusetts",        "MA"),
    ("Michigan",             "MI"),
    ("Minnesota",            "MN"),
    ("Mississippi",          "MS"),
    ("Missouri",             "MO"),
    ("Montana",              "MT"),
    ("Nebraska",             "NE"),
    ("Nevada",               "NV"),
    ("New Hampshire",        "NH"),
    ("New Jersey",           "NJ"),
    ("New Mexico",           "NM"),
    ("New York",             "NY"),
    ("North Carolina",       "NC"),
    ("North Dakota",         "ND"),
    ("Ohio",                 "OH"),
    ("Oklahoma",             "OK"),
    ("Oregon",               "OR"),
    ("Pennsylvania",         "PA"),
    ("Rhode Island",         "RI"),
    ("South Carolina",       "SC"),
    ("South Dakota",         "SD"),
    ("Tennessee",            "TN"),
    ("Texas",                "TX"),
    ("Utah",                 "UT"),
    ("Vermont",              "VT"),
    ("Virginia",             "VA"),
    ("Washington",           "WA"),
    ("West Virginia",        "WV"),
    ("Wisconsin",            "WI"),
    ("Wyoming",              "WY"),
];

/// Look up the postal code for a region name.
pub(super) fn code_for(name: &str) -> Option<&'static str> {
    REGION_CODES.iter().find(|(n, _)| *n == name).map(|(_, code)| *code)
}
