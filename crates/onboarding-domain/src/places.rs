// places.rs
//
// Listas incorporadas de lugares. Las entradas se normalizan al construir
// `LocationLists`, así que aquí pueden escribirse tal cual.

/// Países árabes y ciudades del Golfo admitidos como residencia o destino.
pub const ARABIC_PLACES: &[&str] = &[
  // países
  "عمان", "امارات", "امارات متحده عربی", "عربستان", "عربستان سعودی", "سعودی", "کویت", "قطر", "بحرین", "یمن",
  "اردن", "سوریه", "لبنان", "عراق", "فلسطین", "مصر", "لیبی", "تونس", "الجزایر", "مراکش", "سودان",
  // Emiratos
  "دبی", "ابوظبی", "شارجه", "عجمان", "راس الخیمه", "فجیره", "ام القیوین", "العین",
  // Arabia Saudí
  "ریاض", "جده", "دمام", "مکه", "مدینه", "طائف",
  // Kuwait
  "کویت سیتی", "الاحمدی", "حولی",
  // Catar
  "دوحه", "الریان", "الوکره",
  // Baréin
  "منامه", "المحرق", "مدینه حمد",
  // Omán
  "مسقط", "صلاله", "نزوا", "صحار",
  // resto
  "بغداد", "بصره", "نجف", "کربلا", "اربیل", "بیروت", "دمشق", "حلب", "قاهره", "اسکندریه",
];

/// Ciudades, provincias y gentilicios iraníes: nunca se aceptan.
pub const IRANIAN_PLACES: &[&str] = &[
  "تهران", "مشهد", "اصفهان", "شیراز", "تبریز", "کرج", "اهواز", "قم", "کرمانشاه", "ارومیه", "یزد", "زاهدان",
  "رشت", "کرمان", "همدان", "اردبیل", "بندرعباس", "اسلامشهر", "زنجان", "سنندج", "یاسوج", "بوشهر", "بیرجند",
  "شهرکرد", "گرگان", "ساری", "اراک", "بابل", "قزوین", "خرمآباد", "سمنان", "کاشان", "گلستان", "سیستان",
  "بلوچستان", "کهگیلویه", "بویراحمد", "ایران", "جمهوری اسلامی", "ایرانی", "تهرانی", "مشهدی", "اصفهانی",
];
