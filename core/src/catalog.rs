#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const PROJECT_CATALOG: &[ProjectDetail] = &[
    ProjectDetail {
        id: "ecommerce",
        title: "E-Commerce Website",
        description: "A fully responsive online store built with modern web technologies. \
Features include product browsing, shopping cart management, user authentication, \
and secure payment integration.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Payment API", "LocalStorage"],
        features: &[
            "Responsive design for all devices",
            "Product filtering and search",
            "Shopping cart with real-time updates",
            "User account management",
            "Secure checkout process",
        ],
    },
    ProjectDetail {
        id: "weather",
        title: "Weather App",
        description: "Real-time weather application that provides current conditions and \
5-day forecasts. Users can search by city or use geolocation to get local weather information.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Weather API", "Geolocation API"],
        features: &[
            "Current weather conditions",
            "5-day weather forecast",
            "Location-based weather",
            "Search by city name",
            "Interactive weather maps",
        ],
    },
    ProjectDetail {
        id: "taskmanager",
        title: "Task Manager",
        description: "A productivity application for managing daily tasks and to-dos. \
Features drag-and-drop functionality, task categorization, and data persistence using localStorage.",
        technologies: &["React", "JavaScript", "CSS Grid", "LocalStorage", "Drag & Drop API"],
        features: &[
            "Create, edit, and delete tasks",
            "Drag and drop task organization",
            "Task categories and priorities",
            "Persistent data storage",
            "Search and filter tasks",
        ],
    },
    ProjectDetail {
        id: "portfolio",
        title: "Portfolio Template",
        description: "A modern, customizable portfolio template designed for creative professionals. \
Features smooth animations, responsive design, and easy customization options.",
        technologies: &["HTML5", "CSS3", "JavaScript", "CSS Animations", "Responsive Design"],
        features: &[
            "Modern and clean design",
            "Smooth scroll animations",
            "Fully responsive layout",
            "Easy to customize",
            "Optimized performance",
        ],
    },
];

/// Exact, case-sensitive lookup; the id comes straight from a `data-project`
/// attribute.
pub fn project_by_id(id: &str) -> Option<&'static ProjectDetail> {
    PROJECT_CATALOG.iter().find(|entry| entry.id == id)
}

/// One block of the modal body, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    List(&'static [&'static str]),
}

pub fn detail_blocks(project: &ProjectDetail) -> [DetailBlock; 6] {
    [
        DetailBlock::Heading("Description:"),
        DetailBlock::Paragraph(project.description),
        DetailBlock::Heading("Technologies Used:"),
        DetailBlock::List(project.technologies),
        DetailBlock::Heading("Key Features:"),
        DetailBlock::List(project.features),
    ]
}
