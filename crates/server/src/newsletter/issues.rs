//! January 2026 issue in each supported language.

use super::{NewsletterIssue, Section};

pub static ENGLISH: NewsletterIssue = NewsletterIssue {
    month: "January 2026",
    title: "Monthly Institutional Review: A New Vision",
    subtitle: "Exploring 'Giants', O'Keeffe's New York, and the architectural evolution of the High Museum.",
    introduction: "Welcome to our special January edition! As we step into 2026, the High Museum of Art continues its mission to be a leading cultural institution in the Southeast. This month, we're celebrating the architectural brilliance of our campus while spotlighting groundbreaking exhibitions that challenge perspectives and celebrate Black diasporic artistry.",
    sections: &[
        Section {
            title: "Architecture: Structural Light",
            content: "Our campus is a masterpiece of modern architecture. Designed by Richard Meier in 1983 and expanded by Renzo Piano in 2005, the museum offers over 312,000 square feet of gallery space. Meier's signature white porcelain-enameled steel and Piano's light-capturing 'velum' roof system create a unique environment where the building itself becomes a part of the artistic experience.",
            kind: "architecture",
        },
        Section {
            title: "Major Exhibition: Giants",
            content: "On view through January 19, 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' features a world-class collection of works by multigenerational Black diasporic artists. This exhibition celebrates the power of artists as 'giants' who have shaped the history of art and culture, from Jean-Michel Basquiat to Kehinde Wiley.",
            kind: "exhibition",
        },
        Section {
            title: "The City Reimagined: Georgia O'Keeffe",
            content: "Continuing through February 16, 2026, 'Georgia O'Keeffe: My New Yorks' explores the iconic artist's decade-long fascination with the city's skyscrapers and urban structure. Long overshadowed by her New Mexico landscapes, these works reveal O'Keeffe's pioneering role in American Modernism and her ability to find organic form within the mechanical grid.",
            kind: "exhibition",
        },
        Section {
            title: "Community & Access",
            content: "January starts with 'High Frequency Friday' on Jan 3, 2026, featuring local DJs and late-night gallery access. Additionally, 'UPS Second Sunday' on Jan 12 offers free admission and drop-in art-making for families. We invite our members to join these sessions for exclusive curatorial tours starting at 1:00 PM.",
            kind: "event",
        },
    ],
    citation: "Source: High Museum of Art - Official 2026 Institutional Calendar & Exhibition Review",
};

pub static SPANISH: NewsletterIssue = NewsletterIssue {
    month: "Enero 2026",
    title: "Revisión Institucional Mensual: Una Nueva Visión",
    subtitle: "Explorando 'Giants', el Nueva York de O'Keeffe y la evolución arquitectónica del Museo High.",
    introduction: "¡Bienvenidos a nuestra edición especial de enero! Al comenzar el 2026, el Museo de Arte High continúa su misión de ser una institución cultural líder en el sureste. Este mes celebramos la brillantez arquitectónica de nuestro campus mientras destacamos exposiciones innovadoras que desafían perspectivas y celebran el arte de la diáspora negra.",
    sections: &[
        Section {
            title: "Arquitectura: Luz Estructural",
            content: "Nuestro campus es una obra maestra de la arquitectura moderna. Diseñado por Richard Meier en 1983 y ampliado por Renzo Piano en 2005, el museo ofrece más de 312,000 pies cuadrados de espacio de galería. El acero esmaltado en porcelana blanca característico de Meier y el sistema de techo 'velum' de Piano crean un entorno único donde el edificio mismo se convierte en parte de la experiencia artística.",
            kind: "arquitectura",
        },
        Section {
            title: "Exposición Principal: Giants",
            content: "En exhibición hasta el 19 de enero de 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' presenta una colección de clase mundial de obras de artistas de la diáspora negra de varias generaciones. Esta exposición celebra el poder de los archivos maestros como 'gigantes' que han dado forma a la historia del arte y la cultura.",
            kind: "exposición",
        },
        Section {
            title: "La Ciudad Reimaginada: Georgia O'Keeffe",
            content: "Hasta el 16 de febrero de 2026, 'Georgia O'Keeffe: My New Yorks' explora la fascinación de una década de la icónica artista por los rascacielos y la estructura urbana de la ciudad. Estas obras revelan el papel pionero de O'Keeffe en el modernismo estadounidense.",
            kind: "exposición",
        },
        Section {
            title: "Comunidad y Acceso",
            content: "Enero comienza con 'High Frequency Friday' el 3 de enero de 2026, con DJs locales y acceso tardío a las galerías. Además, el 'UPS Second Sunday' del 12 de enero ofrece entrada gratuita y talleres de arte para familias.",
            kind: "evento",
        },
    ],
    citation: "Fuente: Museo de Arte High - Calendario Institucional Oficial 2026 y Revisión de Exposiciones",
};

pub static FRENCH: NewsletterIssue = NewsletterIssue {
    month: "Janvier 2026",
    title: "Revue Institutionnelle Mensuelle : Une Nouvelle Vision",
    subtitle: "Exploration de 'Giants', le New York d'O'Keeffe et l'évolution architecturale du High Museum.",
    introduction: "Bienvenue dans notre édition spéciale de janvier ! Alors que nous entrons en 2026, le High Museum of Art poursuit sa mission d'institution culturelle de premier plan dans le Sud-Est. Ce mois-ci, nous célébrons le génie architectural de notre campus tout en mettant en lumière des expositions révolutionnaires qui défient les perspectives et célèbrent l'art de la diaspora noire.",
    sections: &[
        Section {
            title: "Architecture : Lumière Structurelle",
            content: "Notre campus est un chef-d'œuvre de l'architecture moderne. Conçu par Richard Meier en 1983 et agrandi par Renzo Piano en 2005, le musée offre plus de 312 000 pieds carrés d'espace de galerie. L'acier émaillé de porcelaine blanche signature de Meier et le système de toit 'velum' de Piano créent un environnement unique où le bâtiment lui-même devient une partie de l'expérience artistique.",
            kind: "architecture",
        },
        Section {
            title: "Exposition Majeure : Giants",
            content: "À l'affiche jusqu'au 19 janvier 2026, 'Giants: Art from the Dean Collection of Swizz Beatz and Alicia Keys' présente une collection de classe mondiale d'œuvres d'artistes de la diaspora noire multigénérationnels. Cette exposition célèbre le pouvoir des artistes en tant que 'géants' qui ont façonné l'histoire de l'art et de la culture.",
            kind: "exposition",
        },
        Section {
            title: "La Ville Réimaginée : Georgia O'Keeffe",
            content: "Se poursuivant jusqu'au 16 février 2026, 'Georgia O'Keeffe: My New Yorks' explore la fascination de dix ans de l'artiste emblématique pour les gratte-ciel et la structure urbaine de la ville. Ces œuvres révèlent le rôle de pionnière d'O'Keeffe dans le modernisme américain.",
            kind: "exposition",
        },
        Section {
            title: "Communauté et Accès",
            content: "Janvier commence avec le 'High Frequency Friday' le 3 janvier de 2026, avec des DJs locaux et un accès tardif aux galeries. De plus, le 'UPS Second Sunday' du 12 janvier offre l'entrée gratuite et des ateliers d'art pour les familles.",
            kind: "événement",
        },
    ],
    citation: "Source : High Museum of Art - Calendrier institutionnel officiel 2026 et revue des expositions",
};
