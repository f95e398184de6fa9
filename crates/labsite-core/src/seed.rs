//! Seed dataset — the default content shown on first run, before any admin
//! edit has been persisted. Guarantees the site is always renderable.

use crate::{
  achievement::Achievement,
  alumni::Alumni,
  content::{
    AboutContent, Activity, ContactInfo, Faq, GalleryImage, History,
    HomeContent, JoinUsContent, Opportunity, TimelineEntry,
  },
  course::Course,
  event::Event,
  instrument::Instrument,
  news::NewsItem,
  person::{Person, PersonCategory},
  publication::{Publication, PublicationKind},
  snapshot::Snapshot,
};

pub fn snapshot() -> Snapshot {
  Snapshot {
    people:          people(),
    publications:    publications(),
    achievements:    achievements(),
    instruments:     instruments(),
    courses:         courses(),
    home_content:    home_content(),
    news:            news(),
    contact_info:    contact_info(),
    events:          events(),
    alumni:          alumni(),
    about_content:   about_content(),
    join_us_content: join_us_content(),
  }
}

fn people() -> Vec<Person> {
  vec![
    Person {
      id:        1,
      name:      "Dr. Meera Iyer".into(),
      role:      "Principal Investigator".into(),
      category:  PersonCategory::Faculty,
      email:     "meera.iyer@lab.example.edu".into(),
      interests: vec![
        "Energy materials".into(),
        "Thin-film deposition".into(),
        "Electrochemistry".into(),
      ],
      bio:       "Leads the lab's work on next-generation energy storage \
                  materials."
        .into(),
      image:     "/media/people/meera-iyer.jpg".into(),
      year_of_joining: Some("2014".into()),
      expected_completion: None,
      iit_profile_link: Some("https://www.example.edu/faculty/miyer".into()),
      phone: Some("+91 11 2659 0000".into()),
    },
    Person {
      id:        2,
      name:      "Arjun Rao".into(),
      role:      "PhD Scholar".into(),
      category:  PersonCategory::ResearchScholar,
      email:     "arjun.rao@lab.example.edu".into(),
      interests: vec!["Battery interfaces".into(), "Impedance spectroscopy".into()],
      bio:       "Studies degradation mechanisms at electrode interfaces.".into(),
      image:     "/media/people/arjun-rao.jpg".into(),
      year_of_joining: Some("2021".into()),
      expected_completion: Some("2026".into()),
      iit_profile_link: None,
      phone: None,
    },
    Person {
      id:        3,
      name:      "Sana Qureshi".into(),
      role:      "MS Scholar".into(),
      category:  PersonCategory::ResearchScholar,
      email:     "sana.qureshi@lab.example.edu".into(),
      interests: vec!["Photovoltaics".into(), "Device simulation".into()],
      bio:       "Works on perovskite solar cell stability.".into(),
      image:     "/media/people/sana-qureshi.jpg".into(),
      year_of_joining: Some("2023".into()),
      expected_completion: Some("2025".into()),
      iit_profile_link: None,
      phone: None,
    },
  ]
}

fn publications() -> Vec<Publication> {
  vec![
    Publication {
      id:       4,
      title:    "Interfacial engineering of solid-state lithium batteries"
        .into(),
      authors:  vec!["A. Rao".into(), "M. Iyer".into()],
      journal:  "Journal of Power Sources".into(),
      year:     2024,
      kind:     PublicationKind::Journal,
      doi:      "10.1000/jps.2024.0412".into(),
      featured: true,
      abstract_text: "We report a scalable interlayer strategy that \
                      suppresses dendrite growth in solid-state cells."
        .into(),
      paper_url: "/media/papers/rao2024-interfaces.pdf".into(),
      code_url:  String::new(),
      venue:     None,
      pages:     Some("234101".into()),
      volume:    Some("598".into()),
      issue:     None,
      publisher: None,
      isbn:      None,
    },
    Publication {
      id:       5,
      title:    "Defect passivation routes for perovskite photovoltaics".into(),
      authors:  vec!["S. Qureshi".into(), "M. Iyer".into()],
      journal:  String::new(),
      year:     2023,
      kind:     PublicationKind::Conference,
      doi:      String::new(),
      featured: false,
      abstract_text: String::new(),
      paper_url: String::new(),
      code_url:  "https://github.com/example-lab/perovskite-sim".into(),
      venue:     Some("IEEE PVSC".into()),
      pages:     Some("1122-1126".into()),
      volume:    None,
      issue:     None,
      publisher: None,
      isbn:      None,
    },
    Publication {
      id:       6,
      title:    "Electrochemical methods for energy materials".into(),
      authors:  vec!["M. Iyer".into()],
      journal:  String::new(),
      year:     2022,
      kind:     PublicationKind::BookChapter,
      doi:      String::new(),
      featured: false,
      abstract_text: String::new(),
      paper_url: String::new(),
      code_url:  String::new(),
      venue:     None,
      pages:     Some("87-114".into()),
      volume:    None,
      issue:     None,
      publisher: Some("Springer".into()),
      isbn:      Some("978-3-030-00000-0".into()),
    },
  ]
}

fn achievements() -> Vec<Achievement> {
  vec![
    Achievement {
      id:          7,
      year:        "2024".into(),
      kind:        "award".into(),
      title:       "Young Investigator Award".into(),
      description: "National award for contributions to energy storage."
        .into(),
      recipient:   "Dr. Meera Iyer".into(),
      icon:        "trophy".into(),
      color:       "amber".into(),
    },
    Achievement {
      id:          8,
      year:        "2023".into(),
      kind:        "grant".into(),
      title:       "DST Core Research Grant".into(),
      description: "Three-year funding for solid-state battery research."
        .into(),
      recipient:   "Lab".into(),
      icon:        "banknote".into(),
      color:       "green".into(),
    },
  ]
}

fn instruments() -> Vec<Instrument> {
  vec![
    Instrument {
      id:           9,
      name:         "Potentiostat / Galvanostat".into(),
      category:     "Electrochemistry".into(),
      image:        "/media/instruments/potentiostat.jpg".into(),
      description:  "Multi-channel workstation for cell cycling and EIS."
        .into(),
      specs:        vec!["8 channels".into(), "±10 V, 1 A".into()],
      applications: vec!["Battery cycling".into(), "Impedance spectroscopy".into()],
      details:      "Bookings via the lab calendar; training required.".into(),
    },
    Instrument {
      id:           10,
      name:         "Glovebox with integrated evaporator".into(),
      category:     "Fabrication".into(),
      image:        "/media/instruments/glovebox.jpg".into(),
      description:  "Inert-atmosphere workstation for moisture-sensitive \
                     device fabrication."
        .into(),
      specs:        vec!["O2 < 0.1 ppm".into(), "H2O < 0.1 ppm".into()],
      applications: vec!["Perovskite films".into(), "Cell assembly".into()],
      details:      "Argon atmosphere; consumables charged per use.".into(),
    },
  ]
}

fn courses() -> Vec<Course> {
  vec![
    Course {
      id:            11,
      title:         "Electrochemical Energy Storage".into(),
      code:          "MSE 642".into(),
      semester:      "Autumn".into(),
      instructor:    "Dr. Meera Iyer".into(),
      credits:       3,
      students:      42,
      description:   "Thermodynamics and kinetics of batteries, fuel cells, \
                      and supercapacitors."
        .into(),
      syllabus:      vec![
        "Electrochemical thermodynamics".into(),
        "Porous electrode theory".into(),
        "Degradation and diagnostics".into(),
      ],
      prerequisites: vec!["MSE 301".into()],
      textbook:      "Newman & Thomas-Alyea, Electrochemical Systems".into(),
      schedule:      "Tue/Thu 10:00-11:30".into(),
    },
    Course {
      id:            12,
      title:         "Thin Film Technology".into(),
      code:          "MSE 517".into(),
      semester:      "Spring".into(),
      instructor:    "Dr. Meera Iyer".into(),
      credits:       4,
      students:      35,
      description:   "Vacuum science, deposition techniques, and film \
                      characterization."
        .into(),
      syllabus:      vec!["Vacuum basics".into(), "PVD and CVD".into()],
      prerequisites: vec![],
      textbook:      "Ohring, Materials Science of Thin Films".into(),
      schedule:      "Mon/Wed 14:00-16:00".into(),
    },
  ]
}

fn news() -> Vec<NewsItem> {
  vec![
    NewsItem {
      id:    13,
      title: "Paper accepted at Journal of Power Sources".into(),
      date:  "2024-11-02".into(),
      kind:  "publication".into(),
    },
    NewsItem {
      id:    14,
      title: "Lab receives DST core research grant".into(),
      date:  "2023-07-15".into(),
      kind:  "grant".into(),
    },
  ]
}

fn events() -> Vec<Event> {
  vec![
    Event {
      id:          15,
      title:       "Seminar: Solid electrolytes at scale".into(),
      description: "Invited talk by Prof. K. Nakamura on manufacturing \
                    challenges for sulfide electrolytes."
        .into(),
      date:        "2025-01-22".into(),
      time:        "15:00".into(),
      location:    "Seminar Hall 2".into(),
      category:    "seminar".into(),
      organizer:   Some("Dr. Meera Iyer".into()),
      registration_link: None,
    },
    Event {
      id:          16,
      title:       "Winter school on battery diagnostics".into(),
      description: "Three-day hands-on workshop covering EIS, GITT, and \
                    post-mortem analysis."
        .into(),
      date:        "2025-12-09".into(),
      time:        "09:00".into(),
      location:    "Materials Block, Lab 104".into(),
      category:    "workshop".into(),
      organizer:   None,
      registration_link: Some("https://forms.example.edu/winter-school".into()),
    },
  ]
}

fn alumni() -> Vec<Alumni> {
  vec![
    Alumni {
      id:              17,
      name:            "Dr. Kavya Menon".into(),
      graduation_year: "2022".into(),
      degree:          "PhD".into(),
      current_position: Some("Senior Scientist".into()),
      company:          Some("Ather Energy".into()),
      location:         Some("Bengaluru".into()),
      image:            Some("/media/people/kavya-menon.jpg".into()),
      achievements:     vec!["Best thesis award, 2022".into()],
    },
    Alumni {
      id:              18,
      name:            "Rohit Shetty".into(),
      graduation_year: "2023".into(),
      degree:          "MS".into(),
      current_position: Some("PhD student".into()),
      company:          Some("ETH Zürich".into()),
      location:         Some("Zürich".into()),
      image:            None,
      achievements:     vec![],
    },
  ]
}

fn home_content() -> HomeContent {
  HomeContent {
    hero_title:       "Energy Materials Laboratory".into(),
    hero_subtitle:    "Designing materials for storage and conversion of \
                       clean energy."
      .into(),
    background_image: "/media/hero/lab-panorama.jpg".into(),
    announcement:     "Applications for the 2025 PhD intake are open.".into(),
  }
}

fn contact_info() -> ContactInfo {
  ContactInfo {
    email:   "contact@lab.example.edu".into(),
    phone:   "+91 11 2659 0001".into(),
    address: "Materials Block, Example Institute of Technology, \
              New Delhi 110016"
      .into(),
  }
}

fn about_content() -> AboutContent {
  AboutContent {
    history:    History {
      title:      "Two decades of materials research".into(),
      content:    "Founded in 2005, the lab has grown from a single \
                   deposition chamber to a full energy-materials facility."
        .into(),
      start_year: "2005".into(),
    },
    timeline:   vec![
      TimelineEntry {
        year:        "2005".into(),
        title:       "Lab founded".into(),
        description: "First thin-film deposition system commissioned.".into(),
      },
      TimelineEntry {
        year:        "2018".into(),
        title:       "Battery facility".into(),
        description: "Dry room and cell assembly line installed.".into(),
      },
    ],
    activities: vec![
      Activity {
        title:       "Energy storage".into(),
        description: "Solid-state batteries and beyond-lithium chemistries."
          .into(),
        icon:        "battery".into(),
      },
      Activity {
        title:       "Photovoltaics".into(),
        description: "Perovskite and tandem solar cells.".into(),
        icon:        "sun".into(),
      },
    ],
    gallery:    vec![GalleryImage {
      image:   "/media/gallery/cleanroom.jpg".into(),
      caption: "Class 1000 cleanroom".into(),
    }],
  }
}

fn join_us_content() -> JoinUsContent {
  JoinUsContent {
    opportunities: vec![
      Opportunity {
        title:       "PhD positions in solid-state batteries".into(),
        kind:        "phd".into(),
        description: "Fully funded positions starting each semester.".into(),
        requirements: vec![
          "MS/MTech in materials, chemistry, or physics".into(),
          "Valid GATE/NET score".into(),
        ],
      },
      Opportunity {
        title:       "Summer research internship".into(),
        kind:        "internship".into(),
        description: "Eight-week projects for undergraduate students.".into(),
        requirements: vec!["Third-year standing or above".into()],
      },
    ],
    contact: ContactInfo {
      email:   "join@lab.example.edu".into(),
      phone:   "+91 11 2659 0002".into(),
      address: "Materials Block, Room 210".into(),
    },
    faqs: vec![
      Faq {
        question: "Do you accept external PhD applicants?".into(),
        answer:   "Yes, through the institute's semester admission cycle."
          .into(),
      },
      Faq {
        question: "Are internships paid?".into(),
        answer:   "A stipend is available for selected candidates.".into(),
      },
    ],
  }
}
