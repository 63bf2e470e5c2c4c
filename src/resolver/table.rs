//! Registered RTI template documents.
//!
//! Paths are opaque strings matching files already published under the
//! documents root. Misspelled folder and file names are kept as they are
//! on disk so existing links stay valid.

use super::DocumentEntry;
use crate::catalog::states::{puducherry, tamil_nadu};
use crate::catalog::template::Naming;

/// `(category folder, [(department name, file name)])`
type Folder = (&'static str, &'static [(&'static str, &'static str)]);

/// Folder holding every Puducherry template.
const PUDUCHERRY_FOLDER: &str = "RTI_Puducherry_ALL_Departments";

/// All entries in registration order: Delhi, Telangana, Tamil Nadu, Puducherry.
pub fn entries() -> Vec<DocumentEntry> {
    let mut entries = Vec::new();
    entries.extend(foldered("delhi", DELHI));
    entries.extend(foldered("telangana", TELANGANA));

    entries.extend(tamil_nadu::DEPARTMENTS.iter().map(|base| {
        let name = Naming::RtiPrefixed.apply(tamil_nadu::NAME, base);
        DocumentEntry {
            path: tamil_nadu_file(&name),
            name,
            state: "tamil-nadu",
            category: None,
        }
    }));

    for section in puducherry::record().sections {
        for name in section.items {
            entries.push(DocumentEntry {
                path: puducherry_file(&name),
                name,
                state: "puducherry",
                category: Some(section.category.clone()),
            });
        }
    }

    entries
}

/// `{state}/{category}/{file}`
fn foldered(
    state: &'static str,
    folders: &'static [Folder],
) -> impl Iterator<Item = DocumentEntry> {
    folders.iter().flat_map(move |(category, files)| {
        files.iter().map(move |(name, file)| DocumentEntry {
            name: (*name).to_owned(),
            path: format!("{state}/{category}/{file}"),
            state,
            category: Some((*category).to_owned()),
        })
    })
}

/// `RTI Tamil Nadu Energy Department` → `RTI_Tamil_Nadu_Energy_Department.pdf`
fn tamil_nadu_file(name: &str) -> String {
    format!("{}.pdf", name.replace(' ', "_"))
}

/// `RTI Puducherry Roads & Bridges Division`
/// → `RTI_Puducherry_ALL_Departments/RTI_Puducherry_Roads_and_Bridges_Division.pdf`
fn puducherry_file(name: &str) -> String {
    let stem = name.replace(',', "").replace('&', "and").replace(' ', "_");
    format!("{PUDUCHERRY_FOLDER}/{stem}.pdf")
}

const DELHI: &[Folder] = &[
    (
        "RTI Delhi Police & Security",
        &[
            ("RTI Delhi Police", "RTI Template For Delhi Police.pdf"),
            (
                "RTI Delhi Fire Services Department",
                "RTI Template For Delhi Fire Services Department.pdf",
            ),
            ("RTI Delhi Prisons Department", "RTI Template For Delhi Prisoners Department.pdf"),
            ("RTI Delhi Home Department", "RTI Template For Delhi Home Department.pdf"),
            ("RTI Delhi Judicial Department", "RTI Template For Delhi Judicial Department.pdf"),
            (
                "RTI Delhi Law, Justice & Legislative Affairs Department",
                "RTI Template For Delhi Law, Justice & Legislative Affairs Department.pdf",
            ),
            (
                "RTI Delhi Disaster Management Department",
                "RTI Template For  Delhi Disaster Management Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Municipal & Housing",
        &[
            (
                "RTI Delhi Municipal Corporation (MCD)",
                "RTI Template For  Delhi Municipal Corporation (MCD).pdf",
            ),
            (
                "RTI Delhi Urban Development Department",
                "RTI Template For Delhi Urban Development Department.pdf",
            ),
            (
                "RTI Delhi Housing & Urban Development Department",
                "RTI Template For  Delhi Housing & Urban Development Department.pdf",
            ),
            (
                "RTI Delhi Public Works Department (PWD)",
                "RTI Template For Delhi Public Works Department (PWD).pdf",
            ),
            (
                "RTI Delhi Rural Development Department",
                "RTI Template For Delhi Rural Development Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Utilities & Infrastructure",
        &[
            ("RTI Delhi Jal Board (DJB)", "RTI Templare For Delhi Jal Board (DJB).pdf"),
            ("RTI Delhi Transco Limited (DTL)", "RTI Template For Delhi Transco Limited (DTL).pdf"),
            ("RTI Delhi Power Department", "RTI Delhi Power Department.pdf"),
            (
                "RTI Delhi Water Supply Department",
                "RTI Template For Delhi Water Supply Department.pdf",
            ),
            (
                "RTI Delhi Ground Water Department",
                "RTI Template for Delhi Ground Water Department.pdf",
            ),
            (
                "RTI Delhi Irrigation & Flood Control Department",
                "RTI Template for Delhi Irrigation & Flood Control Department.pdf",
            ),
            (
                "RTI Delhi Renewable Energy Department",
                "RTI Template for Delhi Renewable Energy Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Government Services",
        &[
            ("RTI Delhi Revenue Department", "RTI Template for Delhi Revenue Department.pdf"),
            ("RTI Delhi Education Department", "RTI Template for Delhi Education Department.pdf"),
            (
                "RTI Delhi Health & Family Welfare Department",
                "RTI Template for Delhi Health & Family Welfare.pdf",
            ),
            ("RTI Delhi Transport Department", "RTI Template for Delhi Transport Department.pdf"),
            ("RTI Delhi Finance Department", "RTI Template for Delhi Finance Department.pdf"),
            (
                "RTI Delhi Registration & Stamps Department",
                "RTI Template for Delhi Registration & Stamps Department.pdf",
            ),
            ("RTI Delhi Planning Department", "RTI Template for Delhi Planning Department.pdf"),
        ],
    ),
    (
        "RTI Delhi Social Welfare",
        &[
            (
                "RTI Delhi Social Welfare Department",
                "RTI Template for Delhi Social Welfare Department.pdf",
            ),
            (
                "RTI Delhi Scheduled Castes & Scheduled Tribes Welfare Department",
                "RTI Template for Delhi Scheduled Castes & Scheduled Tribes Welfare Department.pdf",
            ),
            (
                "RTI Delhi Women & Child Development Department",
                "RTI Template for Delhi Women & Child Development Department.pdf",
            ),
            (
                "RTI Delhi Backward Classes Welfare Department",
                "RTI Template for Delhi Backward Classes Welfare Department.pdf",
            ),
            (
                "RTI Delhi Minority Affairs Department",
                "RTI Template for Delhi Minority Affairs Department.pdf",
            ),
            (
                "RTI Delhi Youth & Sports Department",
                "RTI Template for Delhi Youth & Sports Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Commerce & Industry",
        &[
            ("RTI Delhi Labour Department", "RTI Template for Delhi Labour Department.pdf"),
            ("RTI Delhi Industries Department", "RTI Template for Delhi Industries Department.pdf"),
            (
                "RTI Delhi Value Added Tax Department",
                "RTI Template for Delhi Value Added Tax Department.pdf",
            ),
            (
                "RTI Delhi Food, Civil Supplies & Consumer Affairs Department",
                "RTI Template for Delhi Food, Civil Supplies & Consumer Affairs Department.pdf",
            ),
            (
                "RTI Delhi Consumer Affairs Department",
                "RTI Template for Delhi Consumer Affairs Department.pdf",
            ),
            (
                "RTI Delhi Cooperation Department",
                "RTI Template for Delhi Cooperation Department.pdf",
            ),
            (
                "RTI Delhi Agricultural Marketing Department",
                "RTI Template for Delhi Agricultural Marketing Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Environment & Resources",
        &[
            (
                "RTI Delhi Environment Department",
                "RTI Template for Delhi Environment Department.pdf",
            ),
            (
                "RTI Delhi Forest & Wildlife Department",
                "RTI Template for Delhi Forest & Wildlife Department.pdf",
            ),
            (
                "RTI Delhi Mines & Geology Department",
                "RTI Template for Delhi Mines & Geology Department.pdf",
            ),
            (
                "RTI Delhi Science & Technology Department",
                "RTI Template for Delhi Science & Technology Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Culture & Tourism",
        &[
            ("RTI Delhi Tourism Department", "RTI Template for Delhi Tourism Department.pdf"),
            (
                "RTI Delhi Art, Culture & Languages Department",
                "RTI Template for Delhi Art, Culture & Languages Department.pdf",
            ),
            (
                "RTI Delhi Archaeology Department",
                "RTI Template for Delhi Archaeology Department.pdf",
            ),
            (
                "RTI Delhi Handloom & Handicrafts Department",
                "RTI Template for Delhi Handloom & Handicrafts Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Information & Technology",
        &[
            (
                "RTI Delhi Information & Publicity Department",
                "RTI Template for Delhi Information & Publicity Department.pdf",
            ),
            (
                "RTI Delhi Information Technology Department",
                "RTI Template for Delhi Information Technology Department.pdf",
            ),
            (
                "RTI Delhi Telecommunications Department",
                "RTI Template for Delhi Telecommunications Department.pdf",
            ),
            (
                "RTI Delhi Postal Services Department",
                "RTI Template for Delhi Postal Services Department.pdf",
            ),
        ],
    ),
    (
        "RTI Delhi Financial Services",
        &[
            (
                "RTI Delhi Banking & Financial Services Department",
                "RTI Template for Delhi Banking & Financial Services Department.pdf",
            ),
            ("RTI Delhi Insurance Department", "RTI Template for Delhi Insurance Department.pdf"),
            ("RTI Delhi Pension Department", "RTI Template for Delhi Pension Department.pdf"),
        ],
    ),
];

const TELANGANA: &[Folder] = &[
    (
        "RTI Telangana Police & Security",
        &[
            ("RTI Telangana Police Department", "RTI Template for Telangana Police Department.pdf"),
            (
                "RTI Telangana Fire Services Department",
                "RTI Template for Telangana Fire Services Department.pdf",
            ),
            (
                "RTI Telangana Prisons Department",
                "RTI Template for Telangana Prisons Department.pdf",
            ),
            ("RTI Telangana Home Department", "RTI Template for Telangana Home Department.pdf"),
            ("RTI Telangana Law Department", "RTI Template for Telangana Law Department.pdf"),
            (
                "RTI Telangana Disaster Management Department",
                "RTI Template for Telangana Disaster Management Department.pdf",
            ),
        ],
    ),
    // folder is spelled `Muncipal` on disk
    (
        "RTI Telangana Muncipal & Housing",
        &[
            (
                "RTI Greater Hyderabad Municipal Corporation (GHMC)",
                "RTI Template for Greater Hyderabad Municipal Corporation (GHMC).pdf",
            ),
            (
                "RTI Telangana Municipal Administration & Urban Development Department",
                "RTI Template for Telangana Municipal Administration & Urban Development Department (MA&UD).pdf",
            ),
            (
                "RTI Telangana Housing Department",
                "RTI Template for Telangana Housing Department.pdf",
            ),
            (
                "RTI Telangana Public Works Department (PWD)",
                "RTI Template for Telangana Public Works Department (PWD).pdf",
            ),
            (
                "RTI Telangana Panchayat Raj & Rural Development Department",
                "RTI Template for Telangana Panchayat Raj & Rural Development Department.pdf",
            ),
            (
                "RTI Telangana Urban Development Department",
                "RTI Template for Telangana Urban Development Department.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Utilities & Infrastructure",
        &[
            ("RTI Telangana Energy Department", "RTI Template for Telangana Energy Department.pdf"),
            (
                "RTI Telangana State Transmission Corporation (TSTRANSCO)",
                "RTI Template for Telangana State Transmission Corporation (TSTRANSCO).pdf",
            ),
            (
                "RTI Telangana State Power Generation Corporation (TSGENCO)",
                "RTI Template for Telangana State Power Generation Corporation (TSGENCO).pdf",
            ),
            (
                "RTI Telangana State Southern Power Distribution Company (TSSPDCL)",
                "RTI Template for Telangana State Southern Power Distribution Company (TSSPDCL).pdf",
            ),
            (
                "RTI Telangana State Northern Power Distribution Company (TSNPDCL)",
                "RTI Template for Telangana State Northern Power Distribution Company (TSNPDCL).pdf",
            ),
            (
                "RTI Telangana Irrigation & CAD Department",
                "RTI Template for Telangana Irrigation & CAD Department.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Government Services",
        &[
            ("RTI Telangana Secretariat", "RTI Template for Telangana Secretariat.pdf"),
            (
                "RTI Telangana Revenue Department",
                "RTI Template for Telangana Revenue Department.pdf",
            ),
            (
                "RTI Telangana Education Department",
                "RTI Template for Telangana Education Department.pdf",
            ),
            (
                "RTI Telangana Health & Family Welfare Department",
                "RTI Template for Telangana Health & Family Welfare Department.pdf",
            ),
            (
                "RTI Telangana Transport Department",
                "RTI Template for Telangana Transport Department.pdf",
            ),
            (
                "RTI Telangana Finance Department",
                "RTI Template for Telangana Finance Department.pdf",
            ),
            (
                "RTI Telangana Registration & Stamps Department",
                "RTI Template for Telangana Registration & Stamps Department.pdf",
            ),
            (
                "RTI Telangana Planning Department",
                "RTI Template for Telangana Planning Department.pdf",
            ),
        ],
    ),
    // folder is spelled `Telanganga` on disk
    (
        "RTI Telanganga Social Welfare",
        &[
            (
                "RTI Telangana Social Welfare Department",
                "RTI Template for Telangana Social Welfare Department.pdf",
            ),
            (
                "RTI Telangana Scheduled Castes Development Department",
                "RTI Template for Telangana Scheduled Castes Development Department.pdf",
            ),
            (
                "RTI Telangana Scheduled Tribes Welfare Department",
                "RTI Template for Telangana Scheduled Tribes Welfare Department.pdf",
            ),
            (
                "RTI Telangana Women & Child Development Department",
                "RTI Template for Telangana Women & Child Development Department.pdf",
            ),
            (
                "RTI Telangana Backward Classes Welfare Department",
                "RTI Template for Telangana Backward Classes Welfare Department.pdf",
            ),
            (
                "RTI Telangana Minority Welfare Department",
                "RTI Template for Telangana Minority Welfare Department.pdf",
            ),
            (
                "RTI Telangana Youth & Sports Department",
                "RTI Template for Telangana Youth & Sports Department.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Commerce & Industry",
        &[
            ("RTI Telangana Labour Department", "RTI TEMPLATE FOR TELANGANA LABOUR DEPARTMENT.pdf"),
            (
                "RTI Telangana Industries & Commerce Department",
                "RTI TEMPLATE FOR TELANGANA INDUSTRIES & COMMERCE DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Commercial Taxes Department",
                "RTI TEMPLATE FOR TELANGANA COMMERCIAL TAXES DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Food & Civil Supplies Department",
                "RTI TEMPLATE FOR TELANGANA FOOD & CIVIL SUPPLIES DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Agriculture & Cooperation Department",
                "RTI TEMPLATE FOR TELANGANA AGRICULTURE & COOPERATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Handlooms & Textiles Department",
                "RTI TEMPLATE FOR TELANGANA HANDLOOMS & TEXTILES DEPARTMENT.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Environment & Resources",
        &[
            (
                "RTI Telangana Environment Department",
                "RTI TEMPLATE FOR TELANGANA ENVIRONMENT DEPARTMENT.pdf",
            ),
            ("RTI Telangana Forest Department", "RTI TEMPLATE FOR TELANGANA FOREST DEPARTMENT.pdf"),
            (
                "RTI Telangana Mines & Geology Department",
                "RTI TEMPLATE FOR TELANGANA MINES & GEOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Water Resources Department",
                "RTI TEMPLATE FOR TELANGANA WATER RESOURCES DEPARTMENT.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Culture & Tourism",
        &[
            (
                "RTI Telangana Tourism & Culture Department",
                "RTI TEMPLATE FOR TELANGANA TOURISM & CULTURE DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Information & Public Relations Department",
                "RTI TEMPLATE FOR TELANGANA INFORMATION & PUBLIC RELATIONS DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Archaeology Department",
                "RTI TEMPLATE FOR TELANGANA ARCHAEOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Endowments Department",
                "RTI TEMPLATE FOR TELANGANA ENDOWMENTS DEPARTMENT.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Information & Technology",
        &[
            (
                "RTI Telangana Information Technology Department",
                "RTI TEMPLATE FOR TELANGANA INFORMATION TECHNOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana State Technology Services (TSTS)",
                "RTI TEMPLATE FOR TELANGANA STATE TECHNOLOGY SERVICES (TSTS).pdf",
            ),
            (
                "RTI Telangana State FibreNet Limited",
                "RTI TEMPLATE FOR TELANGANA STATE FIBRENET LIMITED.pdf",
            ),
            (
                "RTI Telangana State Innovation Cell",
                "RTI TEMPLATE FOR TELANGANA STATE INNOVATION CELL.pdf",
            ),
        ],
    ),
    (
        "RTI Telangana Education & Health",
        &[
            (
                "RTI Telangana School Education Department",
                "RTI TEMPLATE FOR TELANGANA SCHOOL EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Higher Education Department",
                "RTI TEMPLATE FOR TELANGANA HIGHER EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Technical Education Department",
                "RTI TEMPLATE FOR TELANGANA TECHNICAL EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Medical & Health Department",
                "RTI TEMPLATE FOR TELANGANA MEDICAL & HEALTH DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana State Medical Services & Infrastructure Development Corporation (TSMSIDC)",
                "RTI TEMPLATE FOR TELANGANA STATE MEDICAL SERVICES & INFRASTRUCTURE DEVELOPMENT CORPORATION (TSMSIDC).pdf",
            ),
        ],
    ),
];
