/// Brands offered by the form, in display order.
pub const BRANDS: [&str; 49] = [
    "Samsung",
    "Xiaomi",
    "Vivo",
    "Oppo",
    "Realme",
    "Oneplus",
    "Apple",
    "Motorola",
    "Poco",
    "Iqoo",
    "Tecno",
    "Infinix",
    "Nokia",
    "Realme narzo",
    "Huawei",
    "Google",
    "Honor",
    "Motorola edge",
    "Itel",
    "Sony",
    "Asus",
    "Nothing",
    "Nubia",
    "Lava",
    "Jio",
    "Lg",
    "Gionee",
    "Letv",
    "Redmi",
    "Ikall",
    "Lyf",
    "Oukitel",
    "Lenovo",
    "Zte",
    "Micromax",
    "Doogee",
    "Zanco",
    "Tesla",
    "Cat",
    "Tcl",
    "Vertu",
    "Sharp",
    "Royole",
    "Namotel",
    "Cola",
    "Xtouch",
    "Leeco",
    "Duoqin",
    "Blu",
];

pub fn is_known_brand(brand: &str) -> bool {
    BRANDS.contains(&brand)
}
