// src/model/catalogue.rs
//
// Built-in periodic table used to generate the element property table.
// Atomic radii are Slater's empirical radii, van der Waals radii follow
// Bondi / Alvarez. Both are in Angstrom and absent where no value is tabulated.

use super::elements::Orbital;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogueEntry {
  pub number: u32,
  pub symbol: &'static str,
  pub name: &'static str,
  pub atomic_mass: f64,
  pub atomic_radius: Option<f64>,
  pub van_der_waals_radius: Option<f64>,
}

const N: Option<f64> = None;

const fn el(
  number: u32,
  symbol: &'static str,
  name: &'static str,
  atomic_mass: f64,
  atomic_radius: Option<f64>,
  van_der_waals_radius: Option<f64>,
) -> CatalogueEntry {
  CatalogueEntry {
    number,
    symbol,
    name,
    atomic_mass,
    atomic_radius,
    van_der_waals_radius,
  }
}

#[rustfmt::skip]
pub static ELEMENTS: [CatalogueEntry; 118] = [
  // --- Period 1 ---
  el(1, "H", "Hydrogen", 1.00794, Some(0.25), Some(1.10)),
  el(2, "He", "Helium", 4.002602, N, Some(1.40)),
  // --- Period 2 ---
  el(3, "Li", "Lithium", 6.941, Some(1.45), Some(1.82)),
  el(4, "Be", "Beryllium", 9.012182, Some(1.05), Some(1.53)),
  el(5, "B", "Boron", 10.811, Some(0.85), Some(1.92)),
  el(6, "C", "Carbon", 12.0107, Some(0.70), Some(1.70)),
  el(7, "N", "Nitrogen", 14.0067, Some(0.65), Some(1.55)),
  el(8, "O", "Oxygen", 15.9994, Some(0.60), Some(1.52)),
  el(9, "F", "Fluorine", 18.9984032, Some(0.50), Some(1.47)),
  el(10, "Ne", "Neon", 20.1797, N, Some(1.54)),
  // --- Period 3 ---
  el(11, "Na", "Sodium", 22.98976928, Some(1.80), Some(2.27)),
  el(12, "Mg", "Magnesium", 24.305, Some(1.50), Some(1.73)),
  el(13, "Al", "Aluminum", 26.9815386, Some(1.25), Some(1.84)),
  el(14, "Si", "Silicon", 28.0855, Some(1.10), Some(2.10)),
  el(15, "P", "Phosphorus", 30.973762, Some(1.00), Some(1.80)),
  el(16, "S", "Sulfur", 32.065, Some(1.00), Some(1.80)),
  el(17, "Cl", "Chlorine", 35.453, Some(1.00), Some(1.75)),
  el(18, "Ar", "Argon", 39.948, N, Some(1.88)),
  // --- Period 4 ---
  el(19, "K", "Potassium", 39.0983, Some(2.20), Some(2.75)),
  el(20, "Ca", "Calcium", 40.078, Some(1.80), Some(2.31)),
  el(21, "Sc", "Scandium", 44.955912, Some(1.60), Some(2.15)),
  el(22, "Ti", "Titanium", 47.867, Some(1.40), Some(2.11)),
  el(23, "V", "Vanadium", 50.9415, Some(1.35), Some(2.07)),
  el(24, "Cr", "Chromium", 51.9961, Some(1.40), Some(2.06)),
  el(25, "Mn", "Manganese", 54.938045, Some(1.40), Some(2.05)),
  el(26, "Fe", "Iron", 55.845, Some(1.40), Some(2.04)),
  el(27, "Co", "Cobalt", 58.933195, Some(1.35), Some(2.00)),
  el(28, "Ni", "Nickel", 58.6934, Some(1.35), Some(1.97)),
  el(29, "Cu", "Copper", 63.546, Some(1.35), Some(1.96)),
  el(30, "Zn", "Zinc", 65.409, Some(1.35), Some(2.01)),
  el(31, "Ga", "Gallium", 69.723, Some(1.30), Some(1.87)),
  el(32, "Ge", "Germanium", 72.64, Some(1.25), Some(2.11)),
  el(33, "As", "Arsenic", 74.9216, Some(1.15), Some(1.85)),
  el(34, "Se", "Selenium", 78.96, Some(1.15), Some(1.90)),
  el(35, "Br", "Bromine", 79.904, Some(1.15), Some(1.85)),
  el(36, "Kr", "Krypton", 83.798, N, Some(2.02)),
  // --- Period 5 ---
  el(37, "Rb", "Rubidium", 85.4678, Some(2.35), Some(3.03)),
  el(38, "Sr", "Strontium", 87.62, Some(2.00), Some(2.49)),
  el(39, "Y", "Yttrium", 88.90585, Some(1.80), Some(2.32)),
  el(40, "Zr", "Zirconium", 91.224, Some(1.55), Some(2.23)),
  el(41, "Nb", "Niobium", 92.90638, Some(1.45), Some(2.18)),
  el(42, "Mo", "Molybdenum", 95.94, Some(1.45), Some(2.17)),
  el(43, "Tc", "Technetium", 98.0, Some(1.35), Some(2.16)),
  el(44, "Ru", "Ruthenium", 101.07, Some(1.30), Some(2.13)),
  el(45, "Rh", "Rhodium", 102.9055, Some(1.35), Some(2.10)),
  el(46, "Pd", "Palladium", 106.42, Some(1.40), Some(2.10)),
  el(47, "Ag", "Silver", 107.8682, Some(1.60), Some(2.11)),
  el(48, "Cd", "Cadmium", 112.411, Some(1.55), Some(2.18)),
  el(49, "In", "Indium", 114.818, Some(1.55), Some(1.93)),
  el(50, "Sn", "Tin", 118.71, Some(1.45), Some(2.17)),
  el(51, "Sb", "Antimony", 121.76, Some(1.45), Some(2.06)),
  el(52, "Te", "Tellurium", 127.6, Some(1.40), Some(2.06)),
  el(53, "I", "Iodine", 126.90447, Some(1.40), Some(1.98)),
  el(54, "Xe", "Xenon", 131.293, N, Some(2.16)),
  // --- Period 6 ---
  el(55, "Cs", "Cesium", 132.9054519, Some(2.60), Some(3.43)),
  el(56, "Ba", "Barium", 137.327, Some(2.15), Some(2.68)),
  el(57, "La", "Lanthanum", 138.90547, Some(1.95), Some(2.43)),
  el(58, "Ce", "Cerium", 140.116, Some(1.85), Some(2.42)),
  el(59, "Pr", "Praseodymium", 140.90765, Some(1.85), Some(2.40)),
  el(60, "Nd", "Neodymium", 144.242, Some(1.85), Some(2.39)),
  el(61, "Pm", "Promethium", 145.0, Some(1.85), Some(2.38)),
  el(62, "Sm", "Samarium", 150.36, Some(1.85), Some(2.36)),
  el(63, "Eu", "Europium", 151.964, Some(1.85), Some(2.35)),
  el(64, "Gd", "Gadolinium", 157.25, Some(1.80), Some(2.34)),
  el(65, "Tb", "Terbium", 158.92535, Some(1.75), Some(2.33)),
  el(66, "Dy", "Dysprosium", 162.5, Some(1.75), Some(2.31)),
  el(67, "Ho", "Holmium", 164.93032, Some(1.75), Some(2.30)),
  el(68, "Er", "Erbium", 167.259, Some(1.75), Some(2.29)),
  el(69, "Tm", "Thulium", 168.93421, Some(1.75), Some(2.27)),
  el(70, "Yb", "Ytterbium", 173.04, Some(1.75), Some(2.26)),
  el(71, "Lu", "Lutetium", 174.967, Some(1.75), Some(2.24)),
  el(72, "Hf", "Hafnium", 178.49, Some(1.55), Some(2.23)),
  el(73, "Ta", "Tantalum", 180.94788, Some(1.45), Some(2.22)),
  el(74, "W", "Tungsten", 183.84, Some(1.35), Some(2.18)),
  el(75, "Re", "Rhenium", 186.207, Some(1.35), Some(2.16)),
  el(76, "Os", "Osmium", 190.23, Some(1.30), Some(2.16)),
  el(77, "Ir", "Iridium", 192.217, Some(1.35), Some(2.13)),
  el(78, "Pt", "Platinum", 195.084, Some(1.35), Some(2.13)),
  el(79, "Au", "Gold", 196.966569, Some(1.35), Some(2.14)),
  el(80, "Hg", "Mercury", 200.59, Some(1.50), Some(2.23)),
  el(81, "Tl", "Thallium", 204.3833, Some(1.90), Some(1.96)),
  el(82, "Pb", "Lead", 207.2, Some(1.80), Some(2.02)),
  el(83, "Bi", "Bismuth", 208.9804, Some(1.60), Some(2.07)),
  el(84, "Po", "Polonium", 209.0, Some(1.90), Some(1.97)),
  el(85, "At", "Astatine", 210.0, N, Some(2.02)),
  el(86, "Rn", "Radon", 222.0, N, Some(2.20)),
  // --- Period 7 ---
  el(87, "Fr", "Francium", 223.0, N, Some(3.48)),
  el(88, "Ra", "Radium", 226.0, Some(2.15), Some(2.83)),
  el(89, "Ac", "Actinium", 227.0, Some(1.95), Some(2.47)),
  el(90, "Th", "Thorium", 232.03806, Some(1.80), Some(2.45)),
  el(91, "Pa", "Protactinium", 231.03588, Some(1.80), Some(2.43)),
  el(92, "U", "Uranium", 238.02891, Some(1.75), Some(2.41)),
  el(93, "Np", "Neptunium", 237.0, Some(1.75), Some(2.39)),
  el(94, "Pu", "Plutonium", 244.0, Some(1.75), Some(2.43)),
  el(95, "Am", "Americium", 243.0, Some(1.75), Some(2.44)),
  el(96, "Cm", "Curium", 247.0, N, Some(2.45)),
  el(97, "Bk", "Berkelium", 247.0, N, Some(2.44)),
  el(98, "Cf", "Californium", 251.0, N, Some(2.45)),
  el(99, "Es", "Einsteinium", 252.0, N, Some(2.45)),
  el(100, "Fm", "Fermium", 257.0, N, Some(2.45)),
  el(101, "Md", "Mendelevium", 258.0, N, Some(2.46)),
  el(102, "No", "Nobelium", 259.0, N, Some(2.46)),
  el(103, "Lr", "Lawrencium", 262.0, N, Some(2.46)),
  el(104, "Rf", "Rutherfordium", 267.0, N, N),
  el(105, "Db", "Dubnium", 268.0, N, N),
  el(106, "Sg", "Seaborgium", 269.0, N, N),
  el(107, "Bh", "Bohrium", 270.0, N, N),
  el(108, "Hs", "Hassium", 269.0, N, N),
  el(109, "Mt", "Meitnerium", 278.0, N, N),
  el(110, "Ds", "Darmstadtium", 281.0, N, N),
  el(111, "Rg", "Roentgenium", 282.0, N, N),
  el(112, "Cn", "Copernicium", 285.0, N, N),
  el(113, "Nh", "Nihonium", 286.0, N, N),
  el(114, "Fl", "Flerovium", 289.0, N, N),
  el(115, "Mc", "Moscovium", 290.0, N, N),
  el(116, "Lv", "Livermorium", 293.0, N, N),
  el(117, "Ts", "Tennessine", 294.0, N, N),
  el(118, "Og", "Oganesson", 294.0, N, N),
];

/// Madelung filling order.
const FILL_ORDER: [(u8, char); 19] = [
  (1, 's'), (2, 's'), (2, 'p'), (3, 's'), (3, 'p'), (4, 's'), (3, 'd'),
  (4, 'p'), (5, 's'), (4, 'd'), (5, 'p'), (6, 's'), (4, 'f'), (5, 'd'),
  (6, 'p'), (7, 's'), (5, 'f'), (6, 'd'), (7, 'p'),
];

/// Ground states that break the Madelung rule:
/// (Z, electrons moved, from subshell, to subshell).
const EXCEPTIONS: [(u32, u8, (u8, char), (u8, char)); 20] = [
  (24, 1, (4, 's'), (3, 'd')),  // Cr
  (29, 1, (4, 's'), (3, 'd')),  // Cu
  (41, 1, (5, 's'), (4, 'd')),  // Nb
  (42, 1, (5, 's'), (4, 'd')),  // Mo
  (44, 1, (5, 's'), (4, 'd')),  // Ru
  (45, 1, (5, 's'), (4, 'd')),  // Rh
  (46, 2, (5, 's'), (4, 'd')),  // Pd
  (47, 1, (5, 's'), (4, 'd')),  // Ag
  (57, 1, (4, 'f'), (5, 'd')),  // La
  (58, 1, (4, 'f'), (5, 'd')),  // Ce
  (64, 1, (4, 'f'), (5, 'd')),  // Gd
  (78, 1, (6, 's'), (5, 'd')),  // Pt
  (79, 1, (6, 's'), (5, 'd')),  // Au
  (89, 1, (5, 'f'), (6, 'd')),  // Ac
  (90, 2, (5, 'f'), (6, 'd')),  // Th
  (91, 1, (5, 'f'), (6, 'd')),  // Pa
  (92, 1, (5, 'f'), (6, 'd')),  // U
  (93, 1, (5, 'f'), (6, 'd')),  // Np
  (96, 1, (5, 'f'), (6, 'd')),  // Cm
  (103, 1, (6, 'd'), (7, 'p')), // Lr
];

fn capacity(l: char) -> Option<u8> {
  match l {
    's' => Some(2),
    'p' => Some(6),
    'd' => Some(10),
    'f' => Some(14),
    _ => None,
  }
}

fn l_index(l: char) -> u8 {
  match l {
    's' => 0,
    'p' => 1,
    'd' => 2,
    _ => 3,
  }
}

/// Full ground-state electronic structure for atomic number `z`, sorted by
/// (n, l), e.g. Fe -> `[.., (3,'d',6), (4,'s',2)]`.
pub fn electronic_structure(z: u32) -> Result<Vec<Orbital>, String> {
  if z == 0 {
    return Err("atomic number must be positive".to_string());
  }

  let mut shells: Vec<(u8, char, u8)> = Vec::with_capacity(FILL_ORDER.len());
  let mut remaining = z;
  for &(n, l) in &FILL_ORDER {
    if remaining == 0 {
      break;
    }
    let cap = capacity(l).ok_or_else(|| format!("unknown subshell {}{}", n, l))?;
    let take = remaining.min(cap as u32) as u8;
    shells.push((n, l, take));
    remaining -= take as u32;
  }
  if remaining > 0 {
    return Err(format!("{} electrons do not fit below 8s", remaining));
  }

  if let Some(&(_, moved, from, to)) = EXCEPTIONS.iter().find(|e| e.0 == z) {
    let src = shells
      .iter_mut()
      .find(|s| (s.0, s.1) == from)
      .ok_or_else(|| format!("subshell {}{} is empty", from.0, from.1))?;
    if src.2 < moved {
      return Err(format!("subshell {}{} holds fewer than {} electrons", from.0, from.1, moved));
    }
    src.2 -= moved;

    match shells.iter_mut().find(|s| (s.0, s.1) == to) {
      Some(dst) => dst.2 += moved,
      None => shells.push((to.0, to.1, moved)),
    }
  }

  shells.retain(|s| s.2 > 0);
  shells.sort_by_key(|s| (s.0, l_index(s.1)));
  Ok(shells.into_iter().map(|(n, l, e)| Orbital(n, l, e)).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn total(orbitals: &[Orbital]) -> u32 {
    orbitals.iter().map(|o| o.electrons() as u32).sum()
  }

  #[test]
  fn catalogue_is_ordered_by_atomic_number() {
    for (i, e) in ELEMENTS.iter().enumerate() {
      assert_eq!(e.number as usize, i + 1, "{}", e.symbol);
      assert!(e.atomic_mass > 0.0);
    }
    assert_eq!(ELEMENTS[25].symbol, "Fe");
    assert_eq!(ELEMENTS[117].symbol, "Og");
  }

  #[test]
  fn electron_count_matches_atomic_number() {
    for e in ELEMENTS.iter() {
      let config = electronic_structure(e.number).unwrap();
      assert_eq!(total(&config), e.number, "{}", e.symbol);
      for o in &config {
        assert!(o.electrons() <= capacity(o.l()).unwrap());
      }
    }
  }

  #[test]
  fn iron_has_partly_filled_3d() {
    let config = electronic_structure(26).unwrap();
    assert_eq!(config.last(), Some(&Orbital(4, 's', 2)));
    assert!(config.contains(&Orbital(3, 'd', 6)));
  }

  #[test]
  fn exceptions_are_applied() {
    let cr = electronic_structure(24).unwrap();
    assert!(cr.contains(&Orbital(3, 'd', 5)));
    assert!(cr.contains(&Orbital(4, 's', 1)));

    let pd = electronic_structure(46).unwrap();
    assert!(pd.contains(&Orbital(4, 'd', 10)));
    assert!(!pd.iter().any(|o| o.0 == 5));

    let lr = electronic_structure(103).unwrap();
    assert!(lr.contains(&Orbital(7, 'p', 1)));
  }

  #[test]
  fn rejects_zero() {
    assert!(electronic_structure(0).is_err());
  }
}
