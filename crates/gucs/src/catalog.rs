//! Built-in catalog
//!
//! The department's courses and professors, fixed at build time.

use crate::data::types::{CatalogEntry, EntryKind};

/// Compile-time form of a catalog entry
enum Seed {
    Course {
        class_name: &'static str,
        professor: &'static str,
        about: &'static str,
    },
    Professor {
        name: &'static str,
        about: &'static str,
        image: &'static str,
    },
}

impl Seed {
    fn to_entry(&self) -> CatalogEntry {
        match *self {
            Seed::Course {
                class_name,
                professor,
                about,
            } => CatalogEntry::course(class_name, professor, about),
            Seed::Professor { name, about, image } => {
                CatalogEntry::professor(name, about).with_image(image)
            }
        }
    }
}

#[rustfmt::skip]
static SEED: &[Seed] = &[
    Seed::Course {
        class_name: "Intro to Comp Science: Python",
        professor: "Jami Montgomery",
        about: "This course is intended for non-majors seeking an introduction to computer science and Python programming. The course covers the following topics: basic data types in Python, variables and constants, input and output, Python reserved words and built-in functions, operators, conditional control structures, repetition control structures, basic file operations, user-defined functions, value parameters, lists, scope rules, importing packages, elementary data processing and visualization, and elementary software engineering principles.",
    },
    Seed::Course {
        class_name: "Computer Science I",
        professor: "Nazli Goharian",
        about: "This course is intended for computer science majors and minors, and other students with a serious interest in learning C++ programming. The course covers the following topics: fundamental data types, the C++ string class, variables and constants, and their declaration, console input/output (cin/cout), assignment operators, arithmetic, relational, and Boolean operators, conditional control structures, repetition control structures, basic file operations, user-defined functions, value and reference parameters, scope rules, name precedence, function overloading, template functions, elementary software engineering principles, the Standard Template Library (STL), the vector class, elementary searching and sorting, user-defined classes, operator overloading, pointers, self-referential classes, dynamic object creation and destruction, linked lists, and recursion. COSC-1020 followed by COSC-1110 and COSC-1030 is the introductory sequence for the major and minor programs.",
    },
    Seed::Course {
        class_name: "Computer Science II",
        professor: "W. Woods",
        about: "COSC-1030 surveys advanced topics of C++ programming and introductory concepts of data structures. It is intended for computer science majors, minors, and other students with a serious interest in learning C++ programming. The course covers program design, organization, pointers, self-referential classes, dynamic object creation and destruction, linked lists, recursion, inheritance, virtual methods, polymorphism, template classes and functions, exception handling, C-style arrays, bit operations, elementary algorithm analysis, big-Oh notation, abstract data types, stacks, queues, deques, lists, vectors, sequences, priority queues, searching, and sorting. COSC 1020 followed by COSC 1110 and COSC 1030 is the introductory sequence for CS majors, CS minors, and other students with a strong interest in computer science.",
    },
    Seed::Course {
        class_name: "Math Methods for Comp Sci",
        professor: "Calvin Newport",
        about: "This course, designed to be taken concurrently with COSC-1030, covers mathematical tools and principles that are valuable to the computer scientist. Topics include: propositional and predicate logic; mathematical proofs, including induction; counting and basic probability theory; logarithmic and exponential functions; elementary graph theory; and Big-O notation and asymptotics.",
    },
    Seed::Course {
        class_name: "Data Structures",
        professor: "Bala Kalyanasundaram",
        about: "This course is designed as a second-year course for majors and minors. The main goals of the course are to present a variety of schemes for structuring data so that computer programs can efficiently insert, retrieve, modify, and remove information, to understand and express these operations as formal algorithms, and to analyze these algorithms formally. Using asymptotic analysis, the focus is on the analysis of worst-case running times of algorithms, although the course also covers the analysis of the average-case, amortized, and expected running times for selected algorithms. The data structures that the course surveys include unordered maps, hash tables, general trees, binary trees, ordered maps, search trees, self-balancing trees, multi-way trees, priority queues, heaps, sets, and graphs. Finally, the course reviews elementary sorting algorithms, presents heap-sort, and covers the formal analysis of their running times.",
    },
    Seed::Course {
        class_name: "Advanced Programming",
        professor: "Raymond Essick",
        about: "The objective of the course is to develop a mastery of object-oriented programming using the Java programming language and to expose students to advanced programming and basic software engineering concepts important for upper-division courses. Topics include, event-driven programming, graphical user interfaces (GUIs), human computer interaction, 2/3D Graphics, security, multimedia, exception handling, threads, sockets, networking, unit testing, mobile device programming, and the MapReduce programming model.",
    },
    Seed::Course {
        class_name: "Handheld Device Programming",
        professor: "Mahendran Velauthapillai",
        about: "This course covers Android/IOS programming. The major topics include: GUIs, layouts, menus, resource files, events, touch/gesture processing, accelerometer and motion event handling, images, video, audio, graphics, animation, maps, geo-location, threading, web services, timers, supporting various screen sizes/resolutions, and more. We will write Apps for Android phones/watches, iPhone, and Apple Watch.",
    },
    Seed::Course {
        class_name: "Computational Structures",
        professor: "Unknown",
        about: "The course covers digital systems architecture, assuming only the basics of programming and Boolean logic as background. Computing systems continually become more complex. Naively exploiting the abstract interfaces between technical specialties, sticking with the familiar and accepting the rest on faith, we neither grasp systems as wholes nor understand and create the new. Here, we instead demystify how and why programs make real things happen by sampling a wide spectrum of technology in a bottom-up progression from simple electronics to a representative computer system. That system, rather than being real-world, provides a coherent framework for understanding its purpose and mechanisms, uncluttered by historical artifacts and obscure optimizations. We explore a simple NOT switching breadboard circuit, extend its design to basic logic gates, and go on to briefly discuss 2-d CMOS circuit design, fabrication, and market forces. Looking briefly at historical computing machinery from antiquity onwards, we adopt some concepts, including selections from Boolean logic, digitial arithmetic, information encoding, Finite State Machines (FSM), Turing Machines, and universal simulation. Using a few base digital design elements (MUX, DEMUX, and flipflop), we recursively describe higher-level organizational elements, such as, register files, memories, data-functional units, buses, input/output devices and interfaces, and controller FSM’s. Instruction sets, execution phases, data and instruction flow, Harvard and von Neumann architectures, clocks, timing, and interaction protocol ideas are developed in the process of debugging our simplified, 16-bit, single-threaded, pipelined processor which includes split L1 caches, memory-mapped input/output devices, priority interrupts, privileged execution, memory protection, and address translation. We write small programs, both as text versions of pure binaries as well as using a one-pass assembler, and trace their circuit activity during execution. Along the way, we introduce the low-level hardware/software interface and system structure, including program loading, libraries and linking, stacks, saving and restoring execution state, system calls, input/output device polling and interrupts, memory maps, memory address translation, memory protection, privileged execution, and memory/IO bus and cache object names and name decoding and access protocols. We manage our project materials in a unix command-line environment using a version-control system, along with other unix tools, and therefore also briefly discuss processes, shells, forking, shell environment variables, bash and make syntax, and shell scripts and their execution. Workload includes written assignments, a mid-term exam, a comprehensive final exam, and a processor exploration project consisting of a series of FPGA lab exercises.",
    },
    Seed::Course {
        class_name: "Operating Systems",
        professor: "Jami Montgomery",
        about: "This course studies the software systems that provide the interface between the computer system hardware resources and the users of the system. This interface is composed of a large collection of programs that provide simplified and uniform access to information storage (data and programs on tape, disk, and in memory), processing elements (CPUs and remote computers), input/output devices (telecommunications, keyboards, mice, video displays, printers, etc.), and data acquisition and equipment control devices. Topics include, processes and threads of execution, concurrent process synchronization, concurrent access to hardware resources, file systems, memory management and virtual memory, job scheduling, system modeling and performance evaluation, network communication and protocols, and computer and network security. A variety of example operating systems of different types will be examined and their characteristics compared.",
    },
    Seed::Course {
        class_name: "Introduction to Algorithms",
        professor: "Jeremy Fineman",
        about: "This course explores various techniques used in the design and analysis of computer algorithms. Starting with the divide-and-conquer technique, the course covers various general approaches such as the greedy method and dynamic programming. Depending on time, various examples from the following problem domains will be considered: graph theory, shortest path, max-flow, matching, FFT, data compression, cryptography, and computational geometry. The notions of NP-completeness and computability will be introduced. If time permits, students will be introduced to online and parallel algorithms.",
    },
    Seed::Course {
        class_name: "Deep Learning",
        professor: "Sarah Bargal",
        about: "This course will focus on building state-of-the-art systems in the intersection of deep learning and computer vision. Student will be introduced to deep architectures and learning algorithms for various discriminative and generative computer vision tasks. The course will demonstrate how such tasks are main building blocks in processing images and videos for applications such as self-driving cars, healthcare, surveillance, and human-computer interfaces.",
    },
    Seed::Professor {
        name: "Mahendran Velauthapillai",
        about: "Mahe is one of the most amazing professors I've had at Georgetown. He's hilarious and his teaching style takes some adjusting, but he's so kind and he cares about his students on a level most professors don't. He wants to help you learn, not to waste your time. Take his class and talk to him",
        image: "mahe",
    },
    Seed::Professor {
        name: "Raymond Essick",
        about: "Graduate Program Manager",
        image: "ray",
    },
    Seed::Professor {
        name: "Sarah Bargal",
        about: "Expert in Machine Learning/Deep Learning",
        image: "sarah",
    },
    Seed::Professor {
        name: "Jeremy Fineman",
        about: "Wagner Term Chair in Computer Science",
        image: "jeremy",
    },
    Seed::Professor {
        name: "Bala Kalyanasundaram",
        about: "Craves Family Professor",
        image: "bala",
    },
    Seed::Professor {
        name: "Calvin Newport",
        about: "Director of Undergraduate Studies",
        image: "calvin",
    },
    Seed::Professor {
        name: "W. Woods",
        about: "Lieutenant Colonel, United States Army (Retired)",
        image: "woods",
    },
    Seed::Professor {
        name: "Nazli Goharian",
        about: "Associate Director of the Information Retrieval Lab",
        image: "nazli",
    },
    Seed::Professor {
        name: "Jami Montgomery",
        about: "Expert in Data Visualization, High Performance Computing",
        image: "jami",
    },
];

/// Ordered, read-only list of catalog entries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The department catalog
    pub fn builtin() -> Self {
        Self::from_entries(SEED.iter().map(Seed::to_entry).collect())
    }

    /// A catalog over arbitrary entries
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, in catalog order
    pub fn of_kind(&self, kind: EntryKind) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.kind() == kind).collect()
    }

    pub fn courses(&self) -> Vec<&CatalogEntry> {
        self.of_kind(EntryKind::Course)
    }

    pub fn professors(&self) -> Vec<&CatalogEntry> {
        self.of_kind(EntryKind::Professor)
    }

    /// First entry of `kind` named `name`
    pub fn find(&self, kind: EntryKind, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.matches(kind, name))
    }

    pub fn find_course(&self, class_name: &str) -> Option<&CatalogEntry> {
        self.find(EntryKind::Course, class_name)
    }

    pub fn find_professor(&self, name: &str) -> Option<&CatalogEntry> {
        self.find(EntryKind::Professor, name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.courses().len(), 11);
        assert_eq!(catalog.professors().len(), 9);
    }

    #[test]
    fn test_courses_come_first_in_order() {
        let catalog = Catalog::builtin();
        let first = &catalog.entries()[0];
        assert_eq!(first.class_name(), Some("Intro to Comp Science: Python"));
        assert_eq!(first.professor_name(), "Jami Montgomery");
        assert!(catalog.entries()[..11].iter().all(|e| e.is_class()));
    }

    #[test]
    fn test_find_course() {
        let catalog = Catalog::builtin();
        let entry = catalog.find_course("Data Structures").unwrap();
        assert_eq!(entry.professor_name(), "Bala Kalyanasundaram");
        assert!(entry.about().starts_with("This course is designed as a second-year course"));
        assert!(catalog.find_course("Bala Kalyanasundaram").is_none());
    }

    #[test]
    fn test_professors_have_images() {
        let catalog = Catalog::builtin();
        let bala = catalog.find_professor("Bala Kalyanasundaram").unwrap();
        assert_eq!(bala.image_name(), Some("bala"));
        assert!(catalog.professors().iter().all(|p| p.image_name().is_some()));
    }

    #[test]
    fn test_names_unique_per_kind() {
        let catalog = Catalog::builtin();
        let keys: HashSet<_> = catalog
            .entries()
            .iter()
            .map(|e| (e.kind(), e.display_name()))
            .collect();
        assert_eq!(keys.len(), catalog.len());
    }
}
