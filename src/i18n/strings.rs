//! Per-language string tables.
//!
//! `ENGLISH` is the source table and must be total: every entry non-empty
//! (enforced by test). Other tables may leave entries empty; lookup falls
//! back to the English value for those (see `translations`). Danish ships
//! only navigation and common strings so far; Italian ships no table.

use crate::i18n::translations::{
    CommonStrings, CoresStrings, HeaderStrings, HeroStrings, HomeSections, HomeStrings,
    LaunchesStrings, SectionStrings, Translations, VehiclesStrings,
};

// ==================== English (default, total) ====================

pub static ENGLISH: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX Explorer",
        launches: "Launches",
        vehicles: "Vehicles",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "The Future of Space Travel",
            subtitle: "Discover SpaceX's revolutionary missions, cutting-edge vehicles, and the journey to make life multiplanetary. From historic launches to next-generation spacecraft.",
            explore_launches: "Explore Launches",
            view_fleet: "View Fleet",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "Launch History",
                subtitle: "Complete mission archive",
                description: "Explore every SpaceX launch from Falcon 1's first flight to the latest Starship missions. View detailed mission data, success rates, and launch statistics.",
                cta: "Explore Launches",
            },
            vehicles: SectionStrings {
                title: "Vehicle Fleet",
                subtitle: "Rockets & spacecraft",
                description: "Discover SpaceX's revolutionary vehicles from Falcon 9 to Starship. View detailed specifications, capabilities, and stunning photography of each rocket.",
                cta: "View Fleet",
            },
        },
    },
    launches: LaunchesStrings {
        title: "SpaceX Launches",
        subtitle: "Complete mission history and upcoming launches",
        loading: "Loading launches...",
        error: "Error loading launches",
        no_data: "No launch data available",
        success: "Success",
        failure: "Failure",
        pending: "Pending",
        details: "Details",
        rocket: "Rocket",
        launchpad: "Launchpad",
        links: "Links",
        webcast: "Watch Webcast",
        article: "Read Article",
        wikipedia: "Wikipedia",
    },
    vehicles: VehiclesStrings {
        title: "SpaceX Vehicle Fleet",
        subtitle: "Revolutionary rockets and spacecraft",
        loading: "Loading vehicles...",
        error: "Error loading vehicles",
        no_data: "No vehicle data available",
        active: "Active",
        inactive: "Inactive",
        specifications: "Specifications",
        height: "Height",
        diameter: "Diameter",
        mass: "Mass",
        stages: "Stages",
        engines: "Engines",
        first_flight: "First Flight",
        cost_per_launch: "Cost per Launch",
        success_rate: "Success Rate",
        images: "Images",
        description: "Description",
    },
    cores: CoresStrings {
        title: "SpaceX Booster Cores",
        subtitle: "First-stage boosters and their flight history",
        loading: "Loading cores...",
        error: "Error loading cores",
        no_data: "No core data available",
        status: "Status",
        block: "Block",
        flights: "Flights",
        landings: "Landings",
        // English is the source language of core updates
        update_phrases: &[],
    },
    common: CommonStrings {
        loading: "Loading...",
        error: "An error occurred",
        retry: "Retry",
        no_data: "No data available",
        meters: "m",
        kilograms: "kg",
        million: "million",
    },
};

// ==================== Spanish ====================

pub static SPANISH: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX Explorador",
        launches: "Lanzamientos",
        vehicles: "Vehículos",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "El Futuro de los Viajes Espaciales",
            subtitle: "Descubre las misiones revolucionarias de SpaceX, vehículos de vanguardia y el viaje para hacer la vida multiplanetaria. Desde lanzamientos históricos hasta naves espaciales de próxima generación.",
            explore_launches: "Explorar Lanzamientos",
            view_fleet: "Ver Flota",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "Historial de Lanzamientos",
                subtitle: "Archivo completo de misiones",
                description: "Explora cada lanzamiento de SpaceX desde el primer vuelo del Falcon 1 hasta las últimas misiones de Starship. Ve datos detallados de misiones, tasas de éxito y estadísticas de lanzamiento.",
                cta: "Explorar Lanzamientos",
            },
            vehicles: SectionStrings {
                title: "Flota de Vehículos",
                subtitle: "Cohetes y naves espaciales",
                description: "Descubre los vehículos revolucionarios de SpaceX desde Falcon 9 hasta Starship. Ve especificaciones detalladas, capacidades y fotografía impresionante de cada cohete.",
                cta: "Ver Flota",
            },
        },
    },
    launches: LaunchesStrings {
        title: "Lanzamientos SpaceX",
        subtitle: "Historial completo de misiones y próximos lanzamientos",
        loading: "Cargando lanzamientos...",
        error: "Error al cargar lanzamientos",
        no_data: "No hay datos de lanzamiento disponibles",
        success: "Éxito",
        failure: "Fallo",
        pending: "Pendiente",
        details: "Detalles",
        rocket: "Cohete",
        launchpad: "Plataforma de lanzamiento",
        links: "Enlaces",
        webcast: "Ver transmisión web",
        article: "Leer artículo",
        wikipedia: "Wikipedia",
    },
    vehicles: VehiclesStrings {
        title: "Flota de Vehículos SpaceX",
        subtitle: "Cohetes y naves espaciales revolucionarias",
        loading: "Cargando vehículos...",
        error: "Error al cargar vehículos",
        no_data: "No hay datos de vehículos disponibles",
        active: "Activo",
        inactive: "Inactivo",
        specifications: "Especificaciones",
        height: "Altura",
        diameter: "Diámetro",
        mass: "Masa",
        stages: "Etapas",
        engines: "Motores",
        first_flight: "Primer vuelo",
        cost_per_launch: "Costo por lanzamiento",
        success_rate: "Tasa de éxito",
        images: "Imágenes",
        description: "Descripción",
    },
    cores: CoresStrings {
        title: "Propulsores SpaceX",
        subtitle: "Propulsores de primera etapa y su historial de vuelo",
        loading: "Cargando propulsores...",
        error: "Error al cargar propulsores",
        no_data: "No hay datos de propulsores disponibles",
        status: "Estado",
        block: "Bloque",
        flights: "Vuelos",
        landings: "Aterrizajes",
        update_phrases: &[
            ("Landed on", "Aterrizó en"),
            ("Expended on", "Consumido en"),
            ("Destroyed on impact", "Destruido en el impacto"),
            ("Lost at sea", "Perdido en el mar"),
            ("Active", "Activo"),
            ("Retired", "Retirado"),
        ],
    },
    common: CommonStrings {
        loading: "Cargando...",
        error: "Ocurrió un error",
        retry: "Reintentar",
        no_data: "No hay datos disponibles",
        meters: "m",
        kilograms: "kg",
        million: "millón",
    },
};

// ==================== French ====================

pub static FRENCH: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX Explorateur",
        launches: "Lancements",
        vehicles: "Véhicules",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "L'Avenir du Voyage Spatial",
            subtitle: "Découvrez les missions révolutionnaires de SpaceX, les véhicules de pointe et le voyage pour rendre la vie multiplanétaire. Des lancements historiques aux vaisseaux spatiaux de nouvelle génération.",
            explore_launches: "Explorer les Lancements",
            view_fleet: "Voir la Flotte",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "Historique des Lancements",
                subtitle: "Archive complète des missions",
                description: "Explorez chaque lancement SpaceX depuis le premier vol du Falcon 1 jusqu'aux dernières missions Starship. Consultez les données détaillées des missions, les taux de réussite et les statistiques de lancement.",
                cta: "Explorer les Lancements",
            },
            vehicles: SectionStrings {
                title: "Flotte de Véhicules",
                subtitle: "Fusées et vaisseaux spatiaux",
                description: "Découvrez les véhicules révolutionnaires de SpaceX du Falcon 9 au Starship. Consultez les spécifications détaillées, les capacités et la photographie époustouflante de chaque fusée.",
                cta: "Voir la Flotte",
            },
        },
    },
    launches: LaunchesStrings {
        title: "Lancements SpaceX",
        subtitle: "Historique complet des missions et lancements à venir",
        loading: "Chargement des lancements...",
        error: "Erreur lors du chargement des lancements",
        no_data: "Aucune donnée de lancement disponible",
        success: "Succès",
        failure: "Échec",
        pending: "En attente",
        details: "Détails",
        rocket: "Fusée",
        launchpad: "Pas de tir",
        links: "Liens",
        webcast: "Regarder la diffusion web",
        article: "Lire l'article",
        wikipedia: "Wikipédia",
    },
    vehicles: VehiclesStrings {
        title: "Flotte de Véhicules SpaceX",
        subtitle: "Fusées et vaisseaux spatiaux révolutionnaires",
        loading: "Chargement des véhicules...",
        error: "Erreur lors du chargement des véhicules",
        no_data: "Aucune donnée de véhicule disponible",
        active: "Actif",
        inactive: "Inactif",
        specifications: "Spécifications",
        height: "Hauteur",
        diameter: "Diamètre",
        mass: "Masse",
        stages: "Étages",
        engines: "Moteurs",
        first_flight: "Premier vol",
        cost_per_launch: "Coût par lancement",
        success_rate: "Taux de réussite",
        images: "Images",
        description: "Description",
    },
    cores: CoresStrings {
        title: "Propulseurs SpaceX",
        subtitle: "Propulseurs de premier étage et leur historique de vol",
        loading: "Chargement des propulseurs...",
        error: "Erreur lors du chargement des propulseurs",
        no_data: "Aucune donnée de propulseur disponible",
        status: "Statut",
        block: "Bloc",
        flights: "Vols",
        landings: "Atterrissages",
        update_phrases: &[
            ("Landed on", "S'est posé sur"),
            ("Expended on", "Consommé lors de"),
            ("Destroyed on impact", "Détruit à l'impact"),
            ("Lost at sea", "Perdu en mer"),
            ("Active", "Actif"),
            ("Retired", "Retiré"),
        ],
    },
    common: CommonStrings {
        loading: "Chargement...",
        error: "Une erreur s'est produite",
        retry: "Réessayer",
        no_data: "Aucune donnée disponible",
        meters: "m",
        kilograms: "kg",
        million: "million",
    },
};

// ==================== Chinese ====================

pub static CHINESE: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX 探索者",
        launches: "发射",
        vehicles: "载具",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "太空旅行的未来",
            subtitle: "发现SpaceX的革命性任务、尖端载具，以及让生命成为多行星的旅程。从历史性发射到下一代航天器。",
            explore_launches: "探索发射",
            view_fleet: "查看舰队",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "发射历史",
                subtitle: "完整任务档案",
                description: "探索从猎鹰1号首次飞行到最新星舰任务的每次SpaceX发射。查看详细的任务数据、成功率和发射统计。",
                cta: "探索发射",
            },
            vehicles: SectionStrings {
                title: "载具舰队",
                subtitle: "火箭和航天器",
                description: "发现SpaceX从猎鹰9号到星舰的革命性载具。查看详细规格、能力和每枚火箭的精美摄影。",
                cta: "查看舰队",
            },
        },
    },
    launches: LaunchesStrings {
        title: "SpaceX 发射",
        subtitle: "完整任务历史和即将到来的发射",
        loading: "加载发射中...",
        error: "加载发射时出错",
        no_data: "无发射数据可用",
        success: "成功",
        failure: "失败",
        pending: "待定",
        details: "详情",
        rocket: "火箭",
        launchpad: "发射台",
        links: "链接",
        webcast: "观看网络直播",
        article: "阅读文章",
        wikipedia: "维基百科",
    },
    vehicles: VehiclesStrings {
        title: "SpaceX 载具舰队",
        subtitle: "革命性火箭和航天器",
        loading: "加载载具中...",
        error: "加载载具时出错",
        no_data: "无载具数据可用",
        active: "活跃",
        inactive: "非活跃",
        specifications: "规格",
        height: "高度",
        diameter: "直径",
        mass: "质量",
        stages: "级数",
        engines: "引擎",
        first_flight: "首次飞行",
        cost_per_launch: "每次发射成本",
        success_rate: "成功率",
        images: "图片",
        description: "描述",
    },
    cores: CoresStrings {
        title: "SpaceX 助推器",
        subtitle: "第一级助推器及其飞行历史",
        loading: "加载助推器中...",
        error: "加载助推器时出错",
        no_data: "无助推器数据可用",
        status: "状态",
        block: "批次",
        flights: "飞行次数",
        landings: "着陆次数",
        update_phrases: &[
            ("Landed on", "着陆于"),
            ("Expended on", "消耗于"),
            ("Destroyed on impact", "撞击时损毁"),
            ("Lost at sea", "海上失踪"),
            ("Active", "活跃"),
            ("Retired", "退役"),
        ],
    },
    common: CommonStrings {
        loading: "加载中...",
        error: "发生错误",
        retry: "重试",
        no_data: "无数据可用",
        meters: "米",
        kilograms: "千克",
        million: "百万",
    },
};

// ==================== Japanese ====================

pub static JAPANESE: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX エクスプローラー",
        launches: "打ち上げ",
        vehicles: "機体",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "宇宙旅行の未来",
            subtitle: "SpaceXの革新的なミッション、最先端の機体、そして生命を多惑星にする旅を発見してください。",
            explore_launches: "打ち上げを探索",
            view_fleet: "艦隊を見る",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "打ち上げ履歴",
                subtitle: "完全なミッションアーカイブ",
                description: "Falcon 1の初飛行から最新のStarshipミッションまで、すべてのSpaceX打ち上げを探索してください。",
                cta: "打ち上げを探索",
            },
            vehicles: SectionStrings {
                title: "機体艦隊",
                subtitle: "ロケットと宇宙船",
                description: "Falcon 9からStarshipまでのSpaceXの革新的な機体を発見してください。",
                cta: "艦隊を見る",
            },
        },
    },
    launches: LaunchesStrings {
        title: "SpaceX 打ち上げ",
        subtitle: "完全なミッション履歴",
        loading: "打ち上げを読み込み中...",
        error: "読み込みエラー",
        no_data: "データがありません",
        success: "成功",
        failure: "失敗",
        pending: "保留中",
        details: "詳細",
        rocket: "ロケット",
        launchpad: "発射台",
        links: "リンク",
        webcast: "ウェブキャストを見る",
        article: "記事を読む",
        wikipedia: "ウィキペディア",
    },
    vehicles: VehiclesStrings {
        title: "SpaceX 機体艦隊",
        subtitle: "革新的なロケット",
        loading: "機体を読み込み中...",
        error: "読み込みエラー",
        no_data: "データがありません",
        active: "アクティブ",
        inactive: "非アクティブ",
        specifications: "仕様",
        height: "高さ",
        diameter: "直径",
        mass: "質量",
        stages: "段",
        engines: "エンジン",
        first_flight: "初飛行",
        cost_per_launch: "打ち上げコスト",
        success_rate: "成功率",
        images: "画像",
        description: "説明",
    },
    cores: CoresStrings {
        title: "SpaceX ブースター",
        subtitle: "第一段ブースターとその飛行履歴",
        loading: "ブースターを読み込み中...",
        error: "読み込みエラー",
        no_data: "データがありません",
        status: "状態",
        block: "ブロック",
        flights: "飛行回数",
        landings: "着陸回数",
        update_phrases: &[
            ("Landed on", "着陸:"),
            ("Expended on", "使い切り:"),
            ("Destroyed on impact", "衝突時に破壊"),
            ("Lost at sea", "海上で喪失"),
            ("Active", "アクティブ"),
            ("Retired", "退役"),
        ],
    },
    common: CommonStrings {
        loading: "読み込み中...",
        error: "エラーが発生しました",
        retry: "再試行",
        no_data: "データがありません",
        meters: "m",
        kilograms: "kg",
        million: "百万",
    },
};

// ==================== German ====================

pub static GERMAN: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX Explorer",
        launches: "Starts",
        vehicles: "Fahrzeuge",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "Die Zukunft der Raumfahrt",
            subtitle: "Entdecken Sie SpaceX's revolutionäre Missionen, modernste Fahrzeuge und die Reise, das Leben multiplanetarisch zu machen. Von historischen Starts bis zu Raumschiffen der nächsten Generation.",
            explore_launches: "Starts Erkunden",
            view_fleet: "Flotte Anzeigen",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "Start-Historie",
                subtitle: "Vollständiges Missions-Archiv",
                description: "Erkunden Sie jeden SpaceX-Start vom ersten Flug der Falcon 1 bis zu den neuesten Starship-Missionen. Sehen Sie detaillierte Missionsdaten, Erfolgsraten und Start-Statistiken.",
                cta: "Starts Erkunden",
            },
            vehicles: SectionStrings {
                title: "Fahrzeugflotte",
                subtitle: "Raketen und Raumschiffe",
                description: "Entdecken Sie SpaceX's revolutionäre Fahrzeuge von Falcon 9 bis Starship. Sehen Sie detaillierte Spezifikationen, Fähigkeiten und atemberaubende Fotografie jeder Rakete.",
                cta: "Flotte Anzeigen",
            },
        },
    },
    launches: LaunchesStrings {
        title: "SpaceX Starts",
        subtitle: "Vollständige Missionsgeschichte und bevorstehende Starts",
        loading: "Lade Starts...",
        error: "Fehler beim Laden der Starts",
        no_data: "Keine Start-Daten verfügbar",
        success: "Erfolg",
        failure: "Fehlschlag",
        pending: "Ausstehend",
        details: "Details",
        rocket: "Rakete",
        launchpad: "Startrampe",
        links: "Links",
        webcast: "Webcast ansehen",
        article: "Artikel lesen",
        wikipedia: "Wikipedia",
    },
    vehicles: VehiclesStrings {
        title: "SpaceX Fahrzeugflotte",
        subtitle: "Revolutionäre Raketen und Raumschiffe",
        loading: "Lade Fahrzeuge...",
        error: "Fehler beim Laden der Fahrzeuge",
        no_data: "Keine Fahrzeugdaten verfügbar",
        active: "Aktiv",
        inactive: "Inaktiv",
        specifications: "Spezifikationen",
        height: "Höhe",
        diameter: "Durchmesser",
        mass: "Masse",
        stages: "Stufen",
        engines: "Triebwerke",
        first_flight: "Erstflug",
        cost_per_launch: "Kosten pro Start",
        success_rate: "Erfolgsrate",
        images: "Bilder",
        description: "Beschreibung",
    },
    cores: CoresStrings {
        title: "SpaceX Booster",
        subtitle: "Erststufen-Booster und ihre Flughistorie",
        loading: "Lade Booster...",
        error: "Fehler beim Laden der Booster",
        no_data: "Keine Booster-Daten verfügbar",
        status: "Status",
        block: "Block",
        flights: "Flüge",
        landings: "Landungen",
        update_phrases: &[
            ("Landed on", "Gelandet auf"),
            ("Expended on", "Verbraucht bei"),
            ("Destroyed on impact", "Beim Aufprall zerstört"),
            ("Lost at sea", "Auf See verloren"),
            ("Active", "Aktiv"),
            ("Retired", "Ausgemustert"),
        ],
    },
    common: CommonStrings {
        loading: "Laden...",
        error: "Ein Fehler ist aufgetreten",
        retry: "Wiederholen",
        no_data: "Keine Daten verfügbar",
        meters: "m",
        kilograms: "kg",
        million: "Million",
    },
};

// ==================== Danish (partial) ====================

/// Danish ships navigation and common strings only; everything else falls
/// back to English entry by entry.
pub static DANISH: Translations = Translations {
    header: HeaderStrings {
        title: "SpaceX Udforsker",
        launches: "Opsendelser",
        vehicles: "Fartøjer",
    },
    home: HomeStrings {
        hero: HeroStrings {
            title: "",
            subtitle: "",
            explore_launches: "",
            view_fleet: "",
        },
        sections: HomeSections {
            launches: SectionStrings {
                title: "",
                subtitle: "",
                description: "",
                cta: "",
            },
            vehicles: SectionStrings {
                title: "",
                subtitle: "",
                description: "",
                cta: "",
            },
        },
    },
    launches: LaunchesStrings {
        title: "",
        subtitle: "",
        loading: "",
        error: "",
        no_data: "",
        success: "",
        failure: "",
        pending: "",
        details: "",
        rocket: "",
        launchpad: "",
        links: "",
        webcast: "",
        article: "",
        wikipedia: "",
    },
    vehicles: VehiclesStrings {
        title: "",
        subtitle: "",
        loading: "",
        error: "",
        no_data: "",
        active: "",
        inactive: "",
        specifications: "",
        height: "",
        diameter: "",
        mass: "",
        stages: "",
        engines: "",
        first_flight: "",
        cost_per_launch: "",
        success_rate: "",
        images: "",
        description: "",
    },
    cores: CoresStrings {
        title: "",
        subtitle: "",
        loading: "",
        error: "",
        no_data: "",
        status: "",
        block: "",
        flights: "",
        landings: "",
        update_phrases: &[],
    },
    common: CommonStrings {
        loading: "Indlæser...",
        error: "Der opstod en fejl",
        retry: "Prøv igen",
        no_data: "Ingen data tilgængelig",
        meters: "m",
        kilograms: "kg",
        million: "million",
    },
};
