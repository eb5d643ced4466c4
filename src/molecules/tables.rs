// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Static molecular data. See <https://hitran.org/docs/iso-meta/>.

/// HITRAN molecule identifiers.
pub(super) const MOLECULE_IDENTIFIERS: &[(u32, &str)] = &[
    (1, "H2O"),
    (2, "CO2"),
    (3, "O3"),
    (4, "N2O"),
    (5, "CO"),
    (6, "CH4"),
    (7, "O2"),
    (8, "NO"),
    (9, "SO2"),
    (10, "NO2"),
    (11, "NH3"),
    (12, "HNO3"),
    (13, "OH"),
    (14, "HF"),
    (15, "HCl"),
    (16, "HBr"),
    (17, "HI"),
    (18, "ClO"),
    (19, "OCS"),
    (20, "H2CO"),
    (21, "HOCl"),
    (22, "N2"),
    (23, "HCN"),
    (24, "CH3Cl"),
    (25, "H2O2"),
    (26, "C2H2"),
    (27, "C2H6"),
    (28, "PH3"),
    (29, "COF2"),
    (30, "SF6"),
    (31, "H2S"),
    (32, "HCOOH"),
    (33, "HO2"),
    (34, "O"),
    (35, "ClONO2"),
    (36, "NO+"),
    (37, "HOBr"),
    (38, "C2H4"),
    (39, "CH3OH"),
    (40, "CH3Br"),
    (41, "CH3CN"),
    (42, "CF4"),
    (43, "C4H2"),
    (44, "HC3N"),
    (45, "H2"),
    (46, "CS"),
    (47, "SO3"),
];

/// Species whose line lists come from ExoMol.
pub(super) const EXOMOL_MOLECULES: &[&str] = &["SiO"];

/// Species whose line lists come from GEISA.
pub(super) const GEISA_MOLECULES: &[&str] = &["C6H6"];

/// Species whose line lists come from elsewhere: CH3+ (Changala et al. 2023)
/// and C3H4 (Arabhavi et al. 2024).
pub(super) const OTHER_MOLECULES: &[&str] = &["CH3+", "C3H4"];

/// HITRAN global isotopologue identifiers, keyed by molecule and isotopologue
/// number. Species outside of HITRAN are given identifiers of 200 and up.
pub(super) const GLOBAL_IDENTIFIERS: &[(&str, u8, u32)] = &[
    ("H2O", 1, 1),
    ("H2O", 2, 2),
    ("H2O", 3, 3),
    ("H2O", 4, 4),
    ("H2O", 5, 5),
    ("H2O", 6, 6),
    ("H2O", 7, 129),
    ("CO2", 1, 7),
    ("CO2", 2, 8),
    ("CO2", 3, 9),
    ("CO2", 4, 10),
    ("CO2", 5, 11),
    ("CO2", 6, 12),
    ("CO2", 7, 13),
    ("CO2", 8, 14),
    ("CO2", 9, 121),
    ("CO2", 10, 15),
    ("CO2", 11, 120),
    ("CO2", 12, 122),
    ("O3", 1, 16),
    ("O3", 2, 17),
    ("O3", 3, 18),
    ("O3", 4, 19),
    ("O3", 5, 20),
    ("N2O", 1, 21),
    ("N2O", 2, 22),
    ("N2O", 3, 23),
    ("N2O", 4, 24),
    ("N2O", 5, 25),
    ("CO", 1, 26),
    ("CO", 2, 27),
    ("CO", 3, 28),
    ("CO", 4, 29),
    ("CO", 5, 30),
    ("CO", 6, 31),
    ("CH4", 1, 32),
    ("CH4", 2, 33),
    ("CH4", 3, 34),
    ("CH4", 4, 35),
    ("O2", 1, 36),
    ("O2", 2, 37),
    ("O2", 3, 38),
    ("NO", 1, 39),
    ("NO", 2, 40),
    ("NO", 3, 41),
    ("SO2", 1, 42),
    ("SO2", 2, 43),
    ("NO2", 1, 44),
    ("NH3", 1, 45),
    ("NH3", 2, 46),
    ("HNO3", 1, 47),
    ("HNO3", 2, 117),
    ("OH", 1, 48),
    ("OH", 2, 49),
    ("OH", 3, 50),
    ("HF", 1, 51),
    ("HF", 2, 110),
    ("HCl", 1, 52),
    ("HCl", 2, 53),
    ("HCl", 3, 107),
    ("HCl", 4, 108),
    ("HBr", 1, 54),
    ("HBr", 2, 55),
    ("HBr", 3, 111),
    ("HBr", 4, 112),
    ("HI", 1, 56),
    ("HI", 2, 113),
    ("ClO", 1, 57),
    ("ClO", 2, 58),
    ("OCS", 1, 59),
    ("OCS", 2, 60),
    ("OCS", 3, 61),
    ("OCS", 4, 62),
    ("OCS", 5, 63),
    ("H2CO", 1, 64),
    ("H2CO", 2, 65),
    ("H2CO", 3, 66),
    ("HOCl", 1, 67),
    ("HOCl", 2, 68),
    ("N2", 1, 69),
    ("N2", 2, 118),
    ("HCN", 1, 70),
    ("HCN", 2, 71),
    ("HCN", 3, 72),
    ("CH3Cl", 1, 73),
    ("CH3Cl", 2, 74),
    ("H2O2", 1, 75),
    ("C2H2", 1, 76),
    ("C2H2", 2, 77),
    ("C2H2", 3, 105),
    ("C2H6", 1, 78),
    ("C2H6", 2, 106),
    ("PH3", 1, 79),
    ("COF2", 1, 80),
    ("COF2", 2, 119),
    ("SF6", 1, 126),
    ("H2S", 1, 81),
    ("H2S", 2, 82),
    ("H2S", 3, 83),
    ("HCOOH", 1, 84),
    ("HO2", 1, 85),
    ("O", 1, 86),
    ("ClONO2", 1, 127),
    ("ClONO2", 2, 128),
    ("NO+", 1, 87),
    ("HOBr", 1, 88),
    ("HOBr", 2, 89),
    ("C2H4", 1, 90),
    ("C2H4", 2, 91),
    ("CH3OH", 1, 92),
    ("CH3Br", 1, 93),
    ("CH3Br", 2, 94),
    ("CH3CN", 1, 95),
    ("CF4", 1, 96),
    ("C4H2", 1, 116),
    ("HC3N", 1, 109),
    ("H2", 1, 103),
    ("H2", 2, 115),
    ("CS", 1, 97),
    ("CS", 2, 98),
    ("CS", 3, 99),
    ("CS", 4, 100),
    ("SO3", 1, 114),
    ("C2N2", 1, 123),
    ("COCl2", 1, 124),
    ("COCl2", 2, 125),
    ("SiO", 1, 200),
    ("C6H6", 1, 300),
    ("CH3+", 1, 400),
    ("C3H4", 1, 500),
];

/// Molecular masses \[amu\], keyed by molecule and isotopologue number.
pub(super) const MOLECULAR_MASSES: &[(&str, u8, f64)] = &[
    ("H2O", 1, 18.010565),
    ("H2O", 2, 20.014811),
    ("H2O", 3, 19.01478),
    ("H2O", 4, 19.01674),
    ("H2O", 5, 21.020985),
    ("H2O", 6, 20.020956),
    ("H2O", 7, 20.022915),
    ("CO2", 1, 43.98983),
    ("CO2", 2, 44.993185),
    ("CO2", 3, 45.994076),
    ("CO2", 4, 44.994045),
    ("CO2", 5, 46.997431),
    ("CO2", 6, 45.9974),
    ("CO2", 7, 47.998322),
    ("CO2", 8, 46.998291),
    ("CO2", 9, 45.998262),
    ("CO2", 10, 49.001675),
    ("CO2", 11, 48.001646),
    ("CO2", 12, 47.0016182378),
    ("O3", 1, 47.984745),
    ("O3", 2, 49.988991),
    ("O3", 3, 49.988991),
    ("O3", 4, 48.98896),
    ("O3", 5, 48.98896),
    ("N2O", 1, 44.001062),
    ("N2O", 2, 44.998096),
    ("N2O", 3, 44.998096),
    ("N2O", 4, 46.005308),
    ("N2O", 5, 45.005278),
    ("CO", 1, 27.994915),
    ("CO", 2, 28.99827),
    ("CO", 3, 29.999161),
    ("CO", 4, 28.99913),
    ("CO", 5, 31.002516),
    ("CO", 6, 30.002485),
    ("CH4", 1, 16.0313),
    ("CH4", 2, 17.034655),
    ("CH4", 3, 17.037475),
    ("CH4", 4, 18.04083),
    ("O2", 1, 31.98983),
    ("O2", 2, 33.994076),
    ("O2", 3, 32.994045),
    ("NO", 1, 29.997989),
    ("NO", 2, 30.995023),
    ("NO", 3, 32.002234),
    ("SO2", 1, 63.961901),
    ("SO2", 2, 65.957695),
    ("NO2", 1, 45.992904),
    ("NO2", 2, 46.989938),
    ("NH3", 1, 17.026549),
    ("NH3", 2, 18.023583),
    ("HNO3", 1, 62.995644),
    ("HNO3", 2, 63.99268),
    ("OH", 1, 17.00274),
    ("OH", 2, 19.006986),
    ("OH", 3, 18.008915),
    ("HF", 1, 20.006229),
    ("HF", 2, 21.012404),
    ("HCl", 1, 35.976678),
    ("HCl", 2, 37.973729),
    ("HCl", 3, 36.982853),
    ("HCl", 4, 38.979904),
    ("HBr", 1, 79.92616),
    ("HBr", 2, 81.924115),
    ("HBr", 3, 80.932336),
    ("HBr", 4, 82.930289),
    ("HI", 1, 127.912297),
    ("HI", 2, 128.918472),
    ("ClO", 1, 50.963768),
    ("ClO", 2, 52.960819),
    ("OCS", 1, 59.966986),
    ("OCS", 2, 61.96278),
    ("OCS", 3, 60.970341),
    ("OCS", 4, 60.966371),
    ("OCS", 5, 61.971231),
    ("OCS", 6, 62.966136),
    ("H2CO", 1, 30.010565),
    ("H2CO", 2, 31.01392),
    ("H2CO", 3, 32.014811),
    ("HOCl", 1, 51.971593),
    ("HOCl", 2, 53.968644),
    ("N2", 1, 28.006148),
    ("N2", 2, 29.003182),
    ("HCN", 1, 27.010899),
    ("HCN", 2, 28.014254),
    ("HCN", 3, 28.007933),
    ("CH3Cl", 1, 49.992328),
    ("CH3Cl", 2, 51.989379),
    ("H2O2", 1, 34.00548),
    ("C2H2", 1, 26.01565),
    ("C2H2", 2, 27.019005),
    ("C2H2", 3, 27.021825),
    ("C2H6", 1, 30.04695),
    ("C2H6", 2, 31.050305),
    ("PH3", 1, 33.997238),
    ("COF2", 1, 65.991722),
    ("COF2", 2, 66.995083),
    ("SF6", 1, 145.962492),
    ("H2S", 1, 33.987721),
    ("H2S", 2, 35.983515),
    ("H2S", 3, 34.987105),
    ("HCOOH", 1, 46.00548),
    ("HO2", 1, 32.997655),
    ("O", 1, 15.994915),
    ("ClONO2", 1, 96.956672),
    ("ClONO2", 2, 98.953723),
    ("NO+", 1, 29.997989),
    ("HOBr", 1, 95.921076),
    ("HOBr", 2, 97.919027),
    ("C2H4", 1, 28.0313),
    ("C2H4", 2, 29.034655),
    ("CH3OH", 1, 32.026215),
    ("CH3Br", 1, 93.941811),
    ("CH3Br", 2, 95.939764),
    ("CH3CN", 1, 41.026549),
    ("CF4", 1, 87.993616),
    ("C4H2", 1, 50.01565),
    ("HC3N", 1, 51.010899),
    ("H2", 1, 2.01565),
    ("H2", 2, 3.021825),
    ("CS", 1, 43.971036),
    ("CS", 2, 45.966787),
    ("CS", 3, 44.974368),
    ("CS", 4, 44.970399),
    ("SO3", 1, 79.95682),
    ("C2N2", 1, 52.006148),
    ("COCl2", 1, 97.9326199796),
    ("COCl2", 2, 99.9296698896),
    ("CS2", 1, 75.94414),
    ("CS2", 2, 77.93994),
    ("CS2", 3, 76.943256),
    ("CS2", 4, 76.947495),
    ("SiO", 1, 44.0845),
    ("C6H6", 1, 78.1118),
    ("CH3+", 1, 15.0340),
    ("C3H4", 1, 40.06),
];
