//! The eight deck pages, in presentation order.
//!
//! Each procedure draws onto its own page canvas from hard-coded content
//! and layout constants; re-running one redraws identical output. The only
//! state inside a page is its vertical cursor, reset at the top.

use crate::draw::{wrap_text, Canvas, PAGE_H, PAGE_W};
use crate::theme;

/// Page 1: cover.
pub fn cover(c: &Canvas) {
    c.gradient_bg();

    c.fill_circle(
        PAGE_W / 2.0,
        PAGE_H * 0.6,
        88.0,
        theme::blend(theme::SOLAR_500, theme::DARK_950, 0.05),
    );
    c.fill_circle(
        PAGE_W / 2.0,
        PAGE_H * 0.6,
        63.0,
        theme::blend(theme::AMBER_500, theme::DARK_950, 0.04),
    );
    c.sun_icon(PAGE_W / 2.0, PAGE_H * 0.68, 18.0);

    c.text_centered("SOLARI GROUP", 34.0, PAGE_W / 2.0, 155.0, &c.fonts.bold, theme::WHITE);
    c.text_centered(
        "Global Solar Technology & Operations",
        14.0,
        PAGE_W / 2.0,
        144.0,
        &c.fonts.regular,
        theme::SOLAR_400,
    );
    c.accent_line(PAGE_W / 2.0 - 21.0, 138.0, 42.0, theme::SOLAR_500);
    c.text_centered(
        "Israel  \u{2022}  Panam\u{e1}  \u{2022}  Argentina",
        11.0,
        PAGE_W / 2.0,
        129.0,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );

    c.stat_box(35.0, 53.0, "50+", "Empresas Solares", theme::SOLAR_400);
    c.stat_box(84.0, 53.0, "3", "Mercados", theme::AMBER_400);
    c.stat_box(133.0, 53.0, "34", "Funciones CRM", theme::EMERALD_400);

    c.text_centered(
        "Febrero 2026  \u{2022}  Confidencial",
        8.0,
        PAGE_W / 2.0,
        14.0,
        &c.fonts.regular,
        theme::DARK_500,
    );
}

/// Page 2: who we are, founder, vision, roadmap.
pub fn about(c: &Canvas) {
    c.gradient_bg();
    c.section_header("01", "Qui\u{e9}nes Somos", "", theme::SOLAR_500);

    let mut y = 250.0;
    for line in [
        "Solari Group es una empresa de tecnolog\u{ed}a solar con presencia en Israel,",
        "Panam\u{e1} y Argentina. Desarrollamos plataformas SaaS, herramientas de IA",
        "y soluciones CRM espec\u{ed}ficas para la industria solar.",
    ] {
        c.text(line, 10.5, 18.0, y, &c.fonts.regular, theme::MUTED_TEXT);
        y -= 6.0;
    }
    y -= 8.0;

    c.panel(18.0, y - 38.0, 174.0, 38.0, theme::SOLAR_400);
    c.text(
        "Kaniel Tord \u{2014} Founder & CTO",
        12.5,
        25.0,
        y - 8.0,
        &c.fonts.bold,
        theme::WHITE,
    );
    c.text(
        "KANIEL TORD LLC  \u{2022}  Florida, USA",
        9.0,
        25.0,
        y - 14.5,
        &c.fonts.regular,
        theme::SOLAR_400,
    );
    c.bullet_list(
        25.0,
        y - 22.0,
        &[
            "Fund\u{f3} Navitas \u{2014} CRM solar l\u{ed}der en Israel (50+ empresas)",
            "Ingeniero Full-Stack: React, TypeScript, AI, Supabase",
            "Experiencia en 4 pa\u{ed}ses: Israel, Tailandia, Panam\u{e1}, Argentina",
        ],
        9.0,
        theme::MUTED_TEXT,
    );
    y -= 50.0;

    c.text("Visi\u{f3}n Global", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 9.0;
    for line in [
        "Construir la plataforma tecnol\u{f3}gica solar m\u{e1}s completa de",
        "Latinoam\u{e9}rica, conectando mercados con software inteligente,",
        "IA y datos en tiempo real.",
    ] {
        c.text(line, 10.0, 18.0, y, &c.fonts.regular, theme::LIGHT_TEXT);
        y -= 5.5;
    }
    y -= 10.0;

    c.text("Hoja de Ruta", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 20.0;

    c.line(35.0, y, 175.0, y, theme::color(theme::DARK_700), 1.5);
    c.timeline_dot(46.0, y, "2020", "Navitas Israel", true);
    c.timeline_dot(82.0, y, "2024", "Solar OS SaaS", true);
    c.timeline_dot(118.0, y, "2025", "Solaris Panam\u{e1}", true);
    c.timeline_dot(154.0, y, "2026", "Solari Argentina", false);
    c.text("->", 12.0, 180.0, y - 1.5, &c.fonts.bold, theme::SOLAR_400);
    y -= 28.0;

    c.fill_rect(18.0, y - 20.0, 174.0, 20.0, theme::blend(theme::DARK_900, theme::DARK_950, 0.4));
    c.text("\u{201c}", 20.0, 22.0, y - 10.0, &c.fonts.bold, theme::AMBER_400);
    c.text(
        "Argentina es el pr\u{f3}ximo gran mercado solar de Latinoam\u{e9}rica.",
        10.0,
        29.0,
        y - 8.5,
        &c.fonts.oblique,
        theme::LIGHT_TEXT,
    );
    c.text(
        "Con la tecnolog\u{ed}a correcta, podemos liderar esa transici\u{f3}n.\u{201d}",
        10.0,
        29.0,
        y - 14.5,
        &c.fonts.oblique,
        theme::LIGHT_TEXT,
    );
}

/// Page 3: Navitas Israel track record.
pub fn track_record(c: &Canvas) {
    c.gradient_bg();
    c.section_header(
        "02",
        "Navitas Israel \u{2014} Track Record",
        "El CRM solar l\u{ed}der en Israel, utilizado por 50+ empresas desde 2020.",
        theme::SOLAR_500,
    );

    let stats = [
        ("50+", "Empresas", theme::SOLAR_400),
        ("34", "P\u{e1}ginas CRM", theme::AMBER_400),
        ("100+", "Componentes", theme::EMERALD_400),
        ("73", "Servicios", theme::SOLAR_400),
    ];
    for (i, (num, label, accent)) in stats.iter().enumerate() {
        c.stat_box(18.0 + i as f64 * 44.0, 218.0, num, label, *accent);
    }

    let mut y = 205.0;
    c.text("Funcionalidades Principales", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 13.0;

    let features = [
        (
            "Gesti\u{f3}n de Proyectos",
            "Pipeline completo: propuestas, contratos, instalaciones, mantenimiento",
            theme::SOLAR_400,
        ),
        (
            "Monitoreo en Tiempo Real",
            "SolarEdge + Huawei + Sungrow \u{2014} detecci\u{f3}n de 5 tipos de fallas",
            theme::AMBER_400,
        ),
        (
            "Licencias Regulatorias",
            "Gesti\u{f3}n IEC + seguimiento SLA + alertas autom\u{e1}ticas",
            theme::EMERALD_400,
        ),
        (
            "Dashboard Financiero",
            "CFO Dashboard: NPV, IRR, ROI, modelos econ\u{f3}micos",
            theme::SOLAR_400,
        ),
        (
            "Agente IA Global",
            "Generaci\u{f3}n de propuestas + an\u{e1}lisis inteligente con Claude AI",
            theme::AMBER_400,
        ),
        (
            "Colaboraci\u{f3}n",
            "Multi-usuario, roles, invitaciones, WhatsApp integrado",
            theme::EMERALD_400,
        ),
    ];
    for (title, desc, accent) in features {
        c.feature_row(18.0, y, title, desc, accent);
        y -= 12.5;
    }
    y -= 8.0;

    c.panel(18.0, y - 22.0, 174.0, 22.0, theme::EMERALD_400);
    c.text(
        "En Producci\u{f3}n desde 2020",
        11.0,
        25.0,
        y - 7.0,
        &c.fonts.bold,
        theme::EMERALD_400,
    );
    c.text(
        "Usado diariamente por empresas solares para gestionar proyectos, monitorear",
        9.0,
        25.0,
        y - 13.0,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    c.text(
        "sistemas, generar propuestas y cumplir regulaciones.",
        9.0,
        25.0,
        y - 18.0,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    y -= 32.0;

    c.text_centered(
        "crm.navitas.co.il  \u{2022}  Producci\u{f3}n",
        9.0,
        PAGE_W / 2.0,
        y,
        &c.fonts.regular,
        theme::DARK_500,
    );
}

/// Page 4: Solar OS SaaS platform and pricing.
pub fn platform(c: &Canvas) {
    c.gradient_bg();
    c.section_header(
        "03",
        "Solar OS \u{2014} Plataforma SaaS",
        "Navitas evolucion\u{f3} a Solar OS: un SaaS escalable para cualquier mercado solar.",
        theme::SOLAR_500,
    );

    let mut y = 240.0;
    c.text("Caracter\u{ed}sticas SaaS", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 13.0;

    let features = [
        (
            "Onboarding Wizard",
            "6 pasos: bienvenida -> empresa -> equipo -> quickstart -> integraciones -> listo",
            theme::SOLAR_400,
        ),
        (
            "Guided Tour",
            "5 paradas interactivas con spotlight y tooltips en el dashboard",
            theme::AMBER_400,
        ),
        (
            "Sistema de Logros",
            "10 features trackeadas, 7 milestones, notificaciones con confetti",
            theme::EMERALD_400,
        ),
        (
            "Trial de 30 d\u{ed}as",
            "Registro abierto -> trial gratuito -> banner de upgrade -> Stripe checkout",
            theme::SOLAR_400,
        ),
        (
            "Email Automatizado",
            "Welcome, team invite, trial reminder, weekly digest (Resend API)",
            theme::AMBER_400,
        ),
        (
            "Alertas WhatsApp",
            "Notificaciones de fallas en tiempo real v\u{ed}a WhatsApp",
            theme::EMERALD_400,
        ),
    ];
    for (title, desc, accent) in features {
        c.feature_row(18.0, y, title, desc, accent);
        y -= 12.5;
    }
    y -= 6.0;

    c.text("Planes & Precios", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 8.0;

    let plans = [
        (
            "Starter",
            "ILS 149/mes",
            "10 proyectos, 1 plataforma,",
            "email",
            theme::SOLAR_400,
        ),
        (
            "Pro",
            "ILS 349/mes",
            "Ilimitado, 3 plataformas,",
            "IA, prioridad",
            theme::AMBER_400,
        ),
        (
            "Enterprise",
            "ILS 749/mes",
            "Todo + API, integraciones",
            "custom, SLA dedicado",
            theme::EMERALD_400,
        ),
    ];
    for (i, (name, price, line1, line2, accent)) in plans.iter().enumerate() {
        let bx = 18.0 + i as f64 * 59.5;
        c.panel(bx, y - 30.0, 55.0, 30.0, *accent);
        c.text(name, 11.5, bx + 4.0, y - 7.0, &c.fonts.bold, *accent);
        c.text(price, 14.0, bx + 4.0, y - 14.5, &c.fonts.bold, theme::WHITE);
        c.text(line1, 7.5, bx + 4.0, y - 21.0, &c.fonts.regular, theme::MUTED_TEXT);
        c.text(line2, 7.5, bx + 4.0, y - 25.5, &c.fonts.regular, theme::MUTED_TEXT);
    }
    y -= 40.0;

    c.fill_rect(18.0, y - 20.0, 174.0, 20.0, theme::blend(theme::DARK_900, theme::DARK_950, 0.4));
    c.text(
        "Modelo de Ingresos Recurrentes (MRR)",
        11.0,
        25.0,
        y - 6.5,
        &c.fonts.bold,
        theme::AMBER_400,
    );
    c.text(
        "50 empresas \u{d7} ILS 349 avg = ILS 17,450/mes (~$4,800 USD/mes)",
        9.0,
        25.0,
        y - 12.5,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    c.text(
        "Objetivo 2026: 200 empresas -> $19,200 USD/mes MRR",
        9.0,
        25.0,
        y - 17.5,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
}

/// Page 5: Solaris Panama AI tooling.
pub fn ai_tools(c: &Canvas) {
    c.gradient_bg();
    c.section_header(
        "04",
        "Solaris Panam\u{e1} \u{2014} IA para Solar Comercial",
        "Plataforma de an\u{e1}lisis solar con inteligencia artificial para el mercado paname\u{f1}o.",
        theme::SOLAR_500,
    );

    let mut y = 240.0;
    c.text("Herramientas de IA", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 10.0;

    let tools: [(&str, &[&str], u32); 3] = [
        (
            "Calculadora Solar",
            &[
                "IRR, NPV, LCOE, proyecciones a 25 a\u{f1}os",
                "Datos por defecto de Panam\u{e1} (irradiaci\u{f3}n, tarifas, etc.)",
            ],
            theme::SOLAR_400,
        ),
        (
            "Esc\u{e1}ner de Techos",
            &[
                "Detecci\u{f3}n de edificios v\u{ed}a sat\u{e9}lite (Mapbox + Overpass)",
                "Investigaci\u{f3}n de propietarios: 7 fuentes de datos",
                "Puntuaci\u{f3}n de confianza 0-100 por fuente",
            ],
            theme::AMBER_400,
        ),
        (
            "Generador de Propuestas",
            &[
                "Claude AI genera propuestas de 8 secciones",
                "Contexto legal de Panam\u{e1} (Ley 417)",
                "An\u{e1}lisis financiero completo + impacto ambiental",
            ],
            theme::EMERALD_400,
        ),
    ];
    for (title, bullets, accent) in tools {
        let box_h = 10.0 + bullets.len() as f64 * 5.5;
        c.panel(18.0, y - box_h, 174.0, box_h, accent);
        c.text(title, 11.5, 25.0, y - 7.0, &c.fonts.bold, accent);
        c.bullet_list(30.0, y - 13.0, bullets, 9.0, theme::MUTED_TEXT);
        y -= box_h + 8.0;
    }
    y -= 4.0;

    c.text(
        "7 Fuentes de Datos para Investigaci\u{f3}n",
        12.0,
        18.0,
        y,
        &c.fonts.bold,
        theme::WHITE,
    );
    y -= 8.0;

    let sources = [
        ("ANATI Catastro", "Registro de tierras de Panam\u{e1}"),
        ("Panam\u{e1} Emprende", "Registro de negocios"),
        ("OpenCorporates", "Informaci\u{f3}n corporativa"),
        ("Google Places", "Detalles de negocios"),
        ("Google Solar API", "Datos de irradiaci\u{f3}n solar"),
        ("PVWatts (NREL)", "Estimaciones de producci\u{f3}n"),
        ("Apollo.io", "Enriquecimiento de contactos"),
    ];
    for (i, (name, desc)) in sources.iter().enumerate() {
        let x = 18.0 + (i % 2) as f64 * 88.0;
        let row_y = y - (i / 2) as f64 * 7.5;
        c.text(&format!("\u{2022} {name}"), 8.5, x, row_y, &c.fonts.bold, theme::SOLAR_400);
        c.text(
            &format!("\u{2014} {desc}"),
            7.5,
            x + 35.0,
            row_y,
            &c.fonts.regular,
            theme::MUTED_TEXT,
        );
    }
}

/// Page 6: the Argentina market opportunity.
pub fn market(c: &Canvas) {
    c.gradient_bg();
    c.section_header(
        "05",
        "Solari Argentina \u{2014} La Oportunidad",
        "El mercado solar argentino creci\u{f3} 92% en 2024. Es el momento de entrar.",
        theme::AMBER_500,
    );

    let stats = [
        ("92%", "Crecimiento YoY", theme::AMBER_400),
        ("78 MW", "DG Instalados", theme::SOLAR_400),
        ("2,918", "Prosumidores", theme::EMERALD_400),
        ("3-5 a\u{f1}os", "Payback", theme::AMBER_400),
    ];
    for (i, (num, label, accent)) in stats.iter().enumerate() {
        c.stat_box(18.0 + i as f64 * 44.0, 218.0, num, label, *accent);
    }

    let mut y = 205.0;
    c.text("\u{bf}Por qu\u{e9} Ahora?", 14.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 13.0;

    let factors = [
        (
            "Tarifas +350%",
            "Aumento masivo en 2024 hace que solar sea rentable por primera vez",
            theme::AMBER_400,
        ),
        (
            "Ley 27.424",
            "Marco regulatorio de generaci\u{f3}n distribuida + net billing aprobado",
            theme::SOLAR_400,
        ),
        (
            "F\u{e1}brica EPSE",
            "400 MW/a\u{f1}o de capacidad local (San Juan) -> -15% costos en 2026",
            theme::EMERALD_400,
        ),
        (
            "Financiamiento",
            "Banco Naci\u{f3}n: hasta 50M ARS, 72 meses + IDB $1.14B + World Bank $480M",
            theme::SOLAR_400,
        ),
        (
            "Mercado Temprano",
            "Solo 2,918 prosumidores vs Brasil (2M+) \u{2014} enorme potencial de crecimiento",
            theme::AMBER_400,
        ),
    ];
    for (title, desc, accent) in factors {
        c.feature_row(18.0, y, title, desc, accent);
        y -= 13.0;
    }
    y -= 5.0;

    c.text("Costos de Sistema (Feb 2026)", 12.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    y -= 7.0;

    let costs = [
        ("Residencial (5-10 kWp)", "$1,750 USD/kWp", "Payback: 3-5 a\u{f1}os"),
        ("Comercial (50-500 kWp)", "$1,400 USD/kWp", "Payback: 2.5-4 a\u{f1}os"),
        ("Industrial (500+ kWp)", "$1,200 USD/kWp", "Payback: 2-3 a\u{f1}os"),
    ];
    for (i, (segment, cost, payback)) in costs.iter().enumerate() {
        let bx = 18.0 + i as f64 * 59.5;
        c.fill_rect(bx, y - 21.0, 55.0, 21.0, theme::panel_fill());
        c.text(segment, 8.0, bx + 3.5, y - 5.5, &c.fonts.bold, theme::WHITE);
        c.text(cost, 12.5, bx + 3.5, y - 12.5, &c.fonts.bold, theme::AMBER_400);
        c.text(payback, 8.0, bx + 3.5, y - 18.0, &c.fonts.regular, theme::MUTED_TEXT);
    }
    y -= 30.0;

    c.text("Cobertura de Provincias", 12.0, 18.0, y, &c.fonts.bold, theme::WHITE);
    y -= 6.5;
    c.text(
        "Nuestra plataforma cubre 17 provincias con datos espec\u{ed}ficos:",
        9.0,
        18.0,
        y,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    y -= 6.0;
    c.text(
        "Buenos Aires \u{2022} CABA \u{2022} C\u{f3}rdoba \u{2022} Mendoza \u{2022} Santa Fe \u{2022} Tucum\u{e1}n \u{2022} San Juan \u{2022} Salta",
        8.0,
        18.0,
        y,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    y -= 5.0;
    c.text(
        "Neuqu\u{e9}n \u{2022} R\u{ed}o Negro \u{2022} San Luis \u{2022} Entre R\u{ed}os \u{2022} Jujuy \u{2022} La Pampa \u{2022} Chaco \u{2022} Misiones \u{2022} Catamarca",
        8.0,
        18.0,
        y,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
}

/// Page 7: technology stack and operating experience.
pub fn technology(c: &Canvas) {
    c.gradient_bg();
    c.section_header(
        "06",
        "Lo que Aportamos",
        "Tecnolog\u{ed}a probada + experiencia operativa + plataforma lista para escalar.",
        theme::SOLAR_500,
    );

    let top = 240.0;
    let col_w = 84.0;
    let col_h = 78.0;

    c.panel(18.0, top - col_h, col_w, col_h, theme::SOLAR_400);
    c.text("Tecnolog\u{ed}a", 12.0, 24.0, top - 9.0, &c.fonts.bold, theme::SOLAR_400);
    c.bullet_list(
        24.0,
        top - 17.0,
        &[
            "React 18 + TypeScript + Vite",
            "Tailwind CSS + Framer Motion",
            "Supabase (PostgreSQL + Auth + RLS)",
            "Vercel Serverless (API + Deploy)",
            "Claude AI (Anthropic) para IA",
            "Mapbox GL + Google Solar API",
            "Stripe para pagos",
            "Resend para emails",
            "WhatsApp para notificaciones",
            "C\u{f3}digo modular y escalable",
        ],
        8.5,
        theme::LIGHT_TEXT,
    );

    c.panel(108.0, top - col_h, col_w, col_h, theme::AMBER_400);
    c.text("Experiencia", 12.0, 114.0, top - 9.0, &c.fonts.bold, theme::AMBER_400);
    c.bullet_list(
        114.0,
        top - 17.0,
        &[
            "6 a\u{f1}os en industria solar",
            "50+ empresas como clientes",
            "3 mercados internacionales",
            "CRM en producci\u{f3}n (5+ a\u{f1}os)",
            "Integraci\u{f3}n con 3 fabricantes",
            "Sistema de monitoreo 24/7",
            "Pipeline de ventas probado",
            "Generaci\u{f3}n de propuestas con IA",
            "An\u{e1}lisis financiero avanzado",
            "Red de proveedores LATAM",
        ],
        8.5,
        theme::LIGHT_TEXT,
    );

    let mut y = top - col_h - 14.0;
    c.text(
        "Lo que el Socio en Argentina Recibe",
        14.0,
        18.0,
        y,
        &c.fonts.bold,
        theme::WHITE,
    );
    c.accent_line(18.0, y - 2.0, 21.0, theme::AMBER_500);
    y -= 13.0;

    let benefits = [
        (
            "Plataforma Completa",
            "CRM + herramientas de propuestas + calculadora solar listas para usar",
            theme::SOLAR_400,
        ),
        (
            "Base de Conocimiento",
            "15 m\u{f3}dulos de academia solar + gu\u{ed}as de 8 provincias + regulaciones",
            theme::AMBER_400,
        ),
        (
            "Red de Proveedores",
            "Cat\u{e1}logo de 7 distribuidores argentinos + 20 modelos de equipos",
            theme::EMERALD_400,
        ),
        (
            "Datos de Mercado",
            "17 provincias con irradiaci\u{f3}n, tarifas, y utilidades mapeadas",
            theme::SOLAR_400,
        ),
        (
            "Marca Internacional",
            "Respaldo de Navitas Israel + Solaris Panam\u{e1} para credibilidad",
            theme::AMBER_400,
        ),
    ];
    for (title, desc, accent) in benefits {
        c.feature_row(18.0, y, title, desc, accent);
        y -= 13.0;
    }
}

/// Page 8: next steps and contact.
pub fn next_steps(c: &Canvas) {
    c.gradient_bg();
    c.section_header("07", "Pr\u{f3}ximos Pasos", "", theme::AMBER_500);

    let steps = [
        (
            "1",
            "Revisi\u{f3}n de Plataforma",
            "Acceder al repositorio, explorar las 15 secciones de la plataforma, y probar las herramientas de propuestas solares.",
            theme::SOLAR_400,
        ),
        (
            "2",
            "Estudio de Mercado Local",
            "Identificar 3-5 provincias prioritarias, validar precios con distribuidores locales, y mapear competidores.",
            theme::AMBER_400,
        ),
        (
            "3",
            "Primeros Clientes Piloto",
            "Generar 10 propuestas solares con la plataforma para clientes reales. Validar el proceso de venta end-to-end.",
            theme::EMERALD_400,
        ),
        (
            "4",
            "Adaptaci\u{f3}n Local",
            "Agregar proveedores locales, ajustar precios, configurar integraciones con utilidades argentinas.",
            theme::SOLAR_400,
        ),
        (
            "5",
            "Lanzamiento Comercial",
            "Definir estructura de precios, comenzar adquisici\u{f3}n de clientes con las 10 estrategias incluidas en la plataforma.",
            theme::AMBER_400,
        ),
    ];

    let mut y = 242.0;
    for (num, title, desc, accent) in steps {
        c.fill_circle(27.0, y + 1.0, 5.5, theme::blend(accent, theme::DARK_950, 0.15));
        c.text_centered(num, 12.0, 27.0, y - 1.0, &c.fonts.bold, accent);
        c.text(title, 11.5, 36.0, y + 1.5, &c.fonts.bold, theme::WHITE);

        let mut line_y = y - 4.5;
        for line in wrap_text(desc, 80) {
            c.text(&line, 9.0, 36.0, line_y, &c.fonts.regular, theme::MUTED_TEXT);
            line_y -= 4.5;
        }
        y -= 25.0;
    }
    y -= 4.0;

    c.panel(18.0, y - 46.0, 174.0, 46.0, theme::SOLAR_400);
    c.sun_icon(PAGE_W / 2.0, y - 9.0, 7.0);
    c.text_centered("Kaniel Tord", 16.0, PAGE_W / 2.0, y - 20.0, &c.fonts.bold, theme::WHITE);
    c.text_centered(
        "k@kanielt.com",
        11.0,
        PAGE_W / 2.0,
        y - 27.0,
        &c.fonts.regular,
        theme::SOLAR_400,
    );
    c.text_centered(
        "kanielt.com  \u{2022}  github.com/kaniel149  \u{2022}  +972 50 221 3948",
        9.0,
        PAGE_W / 2.0,
        y - 34.0,
        &c.fonts.regular,
        theme::MUTED_TEXT,
    );
    c.text_centered(
        "KANIEL TORD LLC  \u{2022}  Florida, USA",
        9.0,
        PAGE_W / 2.0,
        y - 41.0,
        &c.fonts.regular,
        theme::DARK_500,
    );

    c.text_centered(
        "Solari Group  \u{2022}  Febrero 2026  \u{2022}  Confidencial",
        7.0,
        PAGE_W / 2.0,
        14.0,
        &c.fonts.regular,
        theme::DARK_600,
    );
    c.text_centered(
        "github.com/kaniel149/solari-argentina",
        7.0,
        PAGE_W / 2.0,
        10.0,
        &c.fonts.regular,
        theme::DARK_600,
    );
}
