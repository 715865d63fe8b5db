//! Tablas fijas de consulta: nombres de cursos y bloques horarios.
//!
//! Cambian por semestre, no en tiempo de ejecución.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Bloques del día (1-9) como (inicio, fin).
pub const TIME_SLOTS: [(&str, &str); 9] = [
    ("08:00", "08:50"),
    ("08:55", "09:45"),
    ("09:50", "10:40"),
    ("10:45", "11:35"),
    ("11:40", "12:30"),
    ("12:35", "13:25"),
    ("13:30", "14:20"),
    ("14:25", "15:15"),
    ("15:20", "16:05"),
];

/// Código de curso (tal como aparece en la celda) -> nombre completo.
pub const COURSE_NAMES: &[(&str, &str)] = &[
    // Computing core
    ("PF", "Programming Fundamentals"),
    ("PF Lab", "Programming Fundamentals Lab"),
    ("OOP", "Object Oriented Programming"),
    ("OOP Lab", "Object Oriented Programming Lab"),
    ("DS", "Data Structures"),
    ("DS Lab", "Data Structures Lab"),
    ("DAA", "Design & Analysis of Algorithms"),
    ("DLD", "Digital Logic Design"),
    ("DLD Lab", "Digital Logic Design Lab"),
    ("COAL", "Computer Organization & Assembly Language"),
    ("COAL Lab", "Computer Organization & Assembly Language Lab"),
    ("CA", "Computer Architecture"),
    ("OS", "Operating Systems"),
    ("OS Lab", "Operating Systems Lab"),
    ("DB", "Database Systems"),
    ("DB Lab", "Database Systems Lab"),
    ("CN", "Computer Networks"),
    ("CN Lab", "Computer Networks Lab"),
    ("AI", "Artificial Intelligence"),
    ("AI Lab", "Artificial Intelligence Lab"),
    ("TOA", "Theory of Automata"),
    ("CC", "Compiler Construction"),
    ("PDC", "Parallel & Distributed Computing"),
    ("IS", "Information Security"),
    ("ICT", "Introduction to Information & Communication Technology"),
    ("ICT Lab", "Introduction to Information & Communication Technology Lab"),
    ("DiscS", "Discrete Structures"),
    ("AP", "Applied Physics"),
    ("AP Lab", "Applied Physics Lab"),
    ("FYP-I", "Final Year Project - I"),
    ("FYP-II", "Final Year Project - II"),
    // Software engineering
    ("SE", "Software Engineering"),
    ("SDA", "Software Design & Architecture"),
    ("SDA Lab", "Software Design & Architecture Lab"),
    ("SRE", "Software Requirements Engineering"),
    ("SQE", "Software Quality Engineering"),
    ("SPM", "Software Project Management"),
    ("SCD", "Software Construction & Development"),
    ("SCD Lab", "Software Construction & Development Lab"),
    ("HCI", "Human Computer Interaction"),
    ("WE", "Web Engineering"),
    ("WE Lab", "Web Engineering Lab"),
    ("MAD", "Mobile Application Development"),
    ("FSE", "Formal Methods in Software Engineering"),
    ("SPI", "Software Process Improvement"),
    ("STQA", "Software Testing & Quality Assurance"),
    // Data science / AI
    ("ML", "Machine Learning"),
    ("ML Lab", "Machine Learning Lab"),
    ("DL", "Deep Learning"),
    ("NLP", "Natural Language Processing"),
    ("CV", "Computer Vision"),
    ("DM", "Data Mining"),
    ("DW", "Data Warehousing & Business Intelligence"),
    ("BDA", "Big Data Analytics"),
    ("IDS", "Introduction to Data Science"),
    ("IDS Lab", "Introduction to Data Science Lab"),
    ("PDS", "Programming for Data Science"),
    ("RL", "Reinforcement Learning"),
    ("GenAI", "Generative AI"),
    ("ANN", "Artificial Neural Networks"),
    // Systems / security electives
    ("CCN", "Cloud Computing"),
    ("NS", "Network Security"),
    ("CS", "Cyber Security"),
    ("DF", "Digital Forensics"),
    ("EH", "Ethical Hacking"),
    ("IoT", "Internet of Things"),
    ("BC", "Blockchain & Cryptocurrency"),
    ("CG", "Computer Graphics"),
    ("GD", "Game Development"),
    ("DevOps", "DevOps"),
    ("ES", "Embedded Systems"),
    ("ES Lab", "Embedded Systems Lab"),
    ("NA", "Numerical Analysis"),
    ("NC", "Numerical Computing"),
    ("AOA", "Advanced Analysis of Algorithms"),
    ("ADB", "Advanced Database Management Systems"),
    ("AOS", "Advanced Operating Systems"),
    // Mathematics & sciences
    ("Cal-I", "Calculus & Analytical Geometry"),
    ("MVC", "Multivariable Calculus"),
    ("LA", "Linear Algebra"),
    ("DE", "Differential Equations"),
    ("P&S", "Probability & Statistics"),
    ("PS", "Probability & Statistics"),
    ("BE", "Basic Electronics"),
    ("AM", "Applied Mathematics"),
    // Humanities & management
    ("ECC", "English Composition & Comprehension"),
    ("ECC Lab", "English Composition & Comprehension Lab"),
    ("CW", "Communication & Presentation Skills"),
    ("TBW", "Technical & Business Writing"),
    ("IS-Isl", "Islamic Studies / Ethics"),
    ("PST", "Pakistan Studies"),
    ("IPS", "Ideology and Constitution of Pakistan"),
    ("PPIT", "Professional Practices in IT"),
    ("FE", "Fundamentals of Economics"),
    ("FA", "Financial Accounting"),
    ("POM", "Principles of Management"),
    ("MKT", "Marketing Management"),
    ("ENT", "Entrepreneurship"),
    ("OB", "Organizational Behavior"),
    ("PSY", "Introduction to Psychology"),
    ("CIV", "Civics and Community Engagement"),
    ("SS", "Social Sciences"),
];

static COURSE_NAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COURSE_NAMES.iter().copied().collect());

/// Nombre completo del curso; si el código no se conoce, el mismo código.
pub fn course_name(code: &str) -> String {
    match COURSE_NAME_MAP.get(code) {
        Some(name) => name.to_string(),
        None => code.to_string(),
    }
}

/// Inicio del bloque `slot` (1-based).
pub fn slot_start(slot: u32) -> Option<&'static str> {
    slot_bounds(slot).map(|(s, _)| s)
}

/// Fin del bloque `slot` (1-based).
pub fn slot_end(slot: u32) -> Option<&'static str> {
    slot_bounds(slot).map(|(_, e)| e)
}

fn slot_bounds(slot: u32) -> Option<(&'static str, &'static str)> {
    let idx = (slot as usize).checked_sub(1)?;
    TIME_SLOTS.get(idx).copied()
}

/// "HH:MM-HH:MM" del bloque, o "Slot N" si el número no existe en la tabla.
pub fn time_slot(slot: u32) -> String {
    match slot_bounds(slot) {
        Some((start, end)) => format!("{}-{}", start, end),
        None => format!("Slot {}", slot),
    }
}

/// Separa "HH:MM-HH:MM" en (inicio, fin).
pub fn split_time_range(range: &str) -> Option<(&str, &str)> {
    let (start, end) = range.split_once('-')?;
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start, end))
}
