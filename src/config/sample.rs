//! The firm's nine offices, used when no catalog file is given.

use crate::domain::model::{Localized, OfficeDefinition};

struct Entry {
    id: &'static str,
    city: &'static str,
    state: &'static str,
    quote: (&'static str, &'static str),
    description: (&'static str, &'static str),
    address: &'static str,
    phone: &'static str,
    email: &'static str,
    hours: (&'static str, &'static str),
    image: &'static str,
    services: &'static [(&'static str, &'static str)],
}

const ACCIDENTS: (&str, &str) = ("ACCIDENTES", "ACCIDENTS");
const IMMIGRATION: (&str, &str) = ("INMIGRACIÓN", "IMMIGRATION");
const CRIMINAL: (&str, &str) = ("CRIMINAL", "CRIMINAL");
const DEPORTATION: (&str, &str) = ("DEPORTACIÓN", "DEPORTATION");
const FAMILY: (&str, &str) = ("FAMILIA", "FAMILY");
const INSURANCE: (&str, &str) = ("SEGUROS", "INSURANCE");

const ENTRIES: &[Entry] = &[
    Entry {
        id: "houston-principal",
        city: "Houston",
        state: "TX",
        quote: ("El centro neurálgico de nuestra firma.", "The nerve center of our firm."),
        description: (
            "Nuestras oficinas de Houston en Navigation Boulevard son las primeras que abrimos hace más de 30 años. Aquí recibimos a más de 200 clientes a la semana.",
            "Our Houston offices on Navigation Boulevard were the first we opened more than 30 years ago. Here we receive over 200 clients a week.",
        ),
        address: "6657 Navigation Blvd, Houston, Texas 77011",
        phone: "(713) 701-1731",
        email: "houston@manuelsolis.com",
        hours: (
            "Lun - Vie 9am - 7pm | Sáb 9am - 4pm",
            "Mon - Fri 9am - 7pm | Sat 9am - 4pm",
        ),
        image: "/offices/Houston.png",
        services: &[ACCIDENTS, IMMIGRATION, CRIMINAL],
    },
    Entry {
        id: "harlingen",
        city: "Harlingen",
        state: "TX",
        quote: ("Conexión directa con la frontera.", "Direct connection with the border."),
        description: (
            "Especializados en defensa de deportación y casos de asilo en la zona de la frontera sur.",
            "Specializing in deportation defense and asylum cases in the southern border area.",
        ),
        address: "320 E. Jackson St., Harlingen, Texas 78550",
        phone: "(956) 597-7090",
        email: "harlingen@manuelsolis.com",
        hours: ("Lun - Vie 9am - 6pm", "Mon - Fri 9am - 6pm"),
        image: "/offices/Harlingen.png",
        services: &[IMMIGRATION, DEPORTATION],
    },
    Entry {
        id: "houston-bellaire",
        city: "Houston Bellaire",
        state: "TX",
        quote: ("Asistencia especializada en el oeste.", "Specialized assistance in the west."),
        description: (
            "Nuestra ubicación en Bellaire ofrece servicios con personal bilingüe en inglés, español y chino para atender a la diversa población.",
            "Our Bellaire location offers services with bilingual staff in English, Spanish, and Chinese to serve the diverse population.",
        ),
        address: "9600 Bellaire Blvd, Suite 237, Houston, TX 77036",
        phone: "(713) 701-1731",
        email: "bellaire@manuelsolis.com",
        hours: ("Lun - Vie 9am - 6pm", "Mon - Fri 9am - 6pm"),
        image: "/offices/Houston.png",
        services: &[IMMIGRATION, FAMILY],
    },
    Entry {
        id: "dallas",
        city: "Dallas",
        state: "TX",
        quote: ("Servicio ininterrumpido para usted.", "Uninterrupted service for you."),
        description: (
            "En el corazón de Dallas, nuestras puertas están abiertas seis días a la semana. Un refugio legal para la comunidad del norte de Texas.",
            "In the heart of Dallas, our doors are open six days a week. A legal haven for the North Texas community.",
        ),
        address: "1120 Empire Central place, Dallas, Texas 75247",
        phone: "(214) 753-8315",
        email: "dallas@manuelsolis.com",
        hours: (
            "Lun - Vie 9am - 6pm | Sáb 8am - 3pm",
            "Mon - Fri 9am - 6pm | Sat 8am - 3pm",
        ),
        image: "/offices/Dallas.png",
        services: &[IMMIGRATION, INSURANCE],
    },
    Entry {
        id: "el-paso",
        city: "El Paso",
        state: "TX",
        quote: ("Luchando en la línea de batalla.", "Fighting on the front line."),
        description: (
            "Sirviendo a la comunidad de El Paso y Juarez con pasión y experiencia en la ley de inmigración.",
            "Serving the El Paso and Juarez community with passion and experience in immigration law.",
        ),
        address: "3632 Admiral Street, El Paso, Texas 79925",
        phone: "(915) 233-7127",
        email: "elpaso@manuelsolis.com",
        hours: ("Lun - Vie 9am - 5pm", "Mon - Fri 9am - 5pm"),
        image: "/offices/El paso.png",
        services: &[IMMIGRATION, CRIMINAL],
    },
    Entry {
        id: "los-angeles",
        city: "Los Angeles",
        state: "CA",
        quote: ("Defensa sin fronteras.", "Defense without borders."),
        description: (
            "Desde Pico Rivera servimos a toda California. Especialistas en casos complejos de deportación y visas de trabajo.",
            "Serving all of California from Pico Rivera. Specialists in complex deportation cases and work visas.",
        ),
        address: "8337 Telegraph Rd, Unit 115, Pico Rivera, California 90660",
        phone: "(213) 784-1554",
        email: "losangeles@manuelsolis.com",
        hours: (
            "Lun - Vie 9am - 6pm | Sáb 8am - 2pm",
            "Mon - Fri 9am - 6pm | Sat 8am - 2pm",
        ),
        image: "/offices/Los Angeles.png",
        services: &[IMMIGRATION, ACCIDENTS],
    },
    Entry {
        id: "chicago",
        city: "Chicago",
        state: "IL",
        quote: ("Justicia para el medio oeste.", "Justice for the Midwest."),
        description: (
            "Atendemos casos de Inmigración, familia, criminal y accidentes en nuestro edificio propio en Cicero.",
            "We handle Immigration, family, criminal, and accident cases in our own building in Cicero.",
        ),
        address: "6000 West Cermak Road, Cicero, Illinois 60804",
        phone: "(312) 477-0389",
        email: "chicago@manuelsolis.com",
        hours: (
            "Lun - Vie 9am - 6pm | Sáb 8am - 4pm",
            "Mon - Fri 9am - 6pm | Sat 8am - 4pm",
        ),
        image: "/offices/Chicago.png",
        services: &[CRIMINAL, FAMILY],
    },
    Entry {
        id: "denver",
        city: "Denver",
        state: "CO",
        quote: ("Protección para Colorado.", "Protection for Colorado."),
        description: (
            "Nuestra oficina en Denver extiende nuestros servicios al área de las Montañas Rocosas, enfocados en defensa migratoria.",
            "Our Denver office extends our services to the Rocky Mountain area, focused on immigration defense.",
        ),
        address: "5400 Ward Road, Building IV, Arvada, Colorado 80002",
        phone: "(720) 358-8973",
        email: "denver@manuelsolis.com",
        hours: ("Lun - Vie 9am - 6pm", "Mon - Fri 9am - 6pm"),
        image: "/offices/Denver.png",
        services: &[IMMIGRATION, ACCIDENTS],
    },
    Entry {
        id: "memphis",
        city: "Memphis",
        state: "TN",
        quote: ("Servicio en el corazón de Tennessee.", "Service in the heart of Tennessee."),
        description: (
            "Desde Memphis, servimos a la comunidad en Tennessee y estados circundantes, ofreciendo experiencia en casos de lesiones personales.",
            "From Memphis, we serve the community in Tennessee and surrounding states, offering expertise in personal injury cases.",
        ),
        address: "3385 Airways Boulevard, Suite 320, Memphis, Tennessee 38116",
        phone: "(901) 557-8357",
        email: "memphis@manuelsolis.com",
        hours: ("Lun - Vie 9am - 5pm", "Mon - Fri 9am - 5pm"),
        image: "/offices/Memphis.png",
        services: &[ACCIDENTS, INSURANCE],
    },
];

fn pair((es, en): (&str, &str)) -> Localized {
    Localized::new(es, en)
}

/// Definitions in publication order (unsorted).
pub fn sample_offices() -> Vec<OfficeDefinition> {
    ENTRIES
        .iter()
        .map(|entry| OfficeDefinition {
            id: Some(entry.id.to_string()),
            city: entry.city.to_string(),
            state: entry.state.to_string(),
            title: Localized::same(entry.city),
            quote: pair(entry.quote),
            description: pair(entry.description),
            hours: pair(entry.hours),
            address: entry.address.to_string(),
            phone: entry.phone.to_string(),
            email: entry.email.to_string(),
            image: entry.image.to_string(),
            services: entry.services.iter().copied().map(pair).collect(),
        })
        .collect()
}
