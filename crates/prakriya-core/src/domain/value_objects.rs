//! Domain value objects: the closed grammatical categories.
//!
//! # Design
//!
//! These are plain `Copy` value types.
//! Every category carries its SLP1 name (`as_str`), which is also what
//! `Display` prints; callers transliterate it for headings. `FromStr`
//! tries, in order: the SLP1 name, the SLP1 name without `~`, the variant
//! name, and the variant name ignoring case. SLP1 is case-sensitive, so
//! `ka` and `Ka` stay distinct suffixes.
//!
//! `ALL` lists the variants in traditional order; enumerators walk it as-is.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $slp:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in traditional order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// SLP1 name of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $slp ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let passes: [&dyn Fn(&$name) -> bool; 4] = [
                    &|v| v.as_str() == s,
                    &|v| v.as_str().replace('~', "") == s,
                    &|v| format!("{v:?}") == s,
                    &|v| format!("{v:?}").eq_ignore_ascii_case(s),
                ];
                passes
                    .iter()
                    .find_map(|pass| Self::ALL.iter().copied().find(|v| pass(v)))
                    .ok_or_else(|| DomainError::UnknownCategory {
                        category: $label,
                        value: s.to_string(),
                    })
            }
        }
    };
}

// ── Nominal categories ───────────────────────────────────────────────────────

category! {
    /// Grammatical gender.
    Linga, "linga" {
        Pum => "puMliNga",
        Stri => "strIliNga",
        Napumsaka => "napuMsakaliNga",
    }
}

category! {
    /// Nominal case, including the vocative.
    Vibhakti, "vibhakti" {
        Prathama => "praTamA",
        Dvitiya => "dvitIyA",
        Trtiya => "tftIyA",
        Caturthi => "caturTI",
        Panchami => "paYcamI",
        Sasthi => "zazWI",
        Saptami => "saptamI",
        Sambodhana => "samboDanam",
    }
}

category! {
    /// Grammatical number.
    Vacana, "vacana" {
        Eka => "ekavacanam",
        Dvi => "dvivacanam",
        Bahu => "bahuvacanam",
    }
}

// ── Verbal categories ────────────────────────────────────────────────────────

category! {
    /// Voice.
    Prayoga, "prayoga" {
        Kartari => "kartari",
        Karmani => "karmaRi",
        Bhave => "BAve",
    }
}

category! {
    /// Tense / mood.
    Lakara, "lakara" {
        Lat => "law",
        Lit => "liw",
        Lut => "luw",
        Lrt => "lfw",
        Let => "lew",
        Lot => "low",
        Lan => "laN",
        VidhiLin => "viDiliN",
        AshirLin => "ASIrliN",
        Lun => "luN",
        Lrn => "lfN",
    }
}

category! {
    /// Grammatical person.
    Purusha, "purusha" {
        Prathama => "praTamapuruzaH",
        Madhyama => "maDyamapuruzaH",
        Uttama => "uttamapuruzaH",
    }
}

category! {
    /// Verb pada (which ending set a form takes).
    DhatuPada, "pada" {
        Parasmaipada => "parasmEpadam",
        Atmanepada => "Atmanepadam",
    }
}

category! {
    /// Verb class of a root in the dhatupatha.
    Gana, "gana" {
        Bhvadi => "BvAdiH",
        Adadi => "adAdiH",
        Juhotyadi => "juhotyAdiH",
        Divadi => "divAdiH",
        Svadi => "svAdiH",
        Tudadi => "tudAdiH",
        Rudhadi => "ruDAdiH",
        Tanadi => "tanAdiH",
        Kryadi => "kryAdiH",
        Curadi => "curAdiH",
        Kandvadi => "kaRqvAdiH",
    }
}

category! {
    /// Suffixes that derive secondary roots.
    Sanadi, "sanadi" {
        San => "san",
        Yan => "yaN",
        YanLuk => "yaNluk",
        Nic => "Ric",
        /// Denominative suffixes; they only ever start a nāma-dhātu.
        Kyac => "kyac",
        Kyan => "kyaN",
        Kamyac => "kAmyac",
    }
}

category! {
    /// Primary (kṛt) suffixes that derive nominal stems from roots.
    ///
    /// Variants are named by their SLP1 form; `as_str` keeps the engine's
    /// anunāsika marker (`kvi~p`).
    #[allow(non_camel_case_types)]
    Krt, "krt" {
        a => "a",
        aN => "aN",
        ac => "ac",
        aR => "aR",
        atfn => "atf~n",
        aTuc => "aTuc",
        aDyE => "aDyE",
        aDyEn => "aDyEn",
        ani => "ani",
        anIyar => "anIyar",
        ap => "ap",
        ase => "ase",
        asen => "asen",
        Aluc => "Aluc",
        Aru => "Aru",
        ika => "ika",
        ikavaka => "ikavaka",
        itra => "itra",
        in_ => "in",
        ini => "ini~",
        izRuc => "izRuc",
        u => "u",
        ukaY => "ukaY",
        Uka => "Uka",
        cAnaS => "cAnaS",
        ka => "ka",
        kaY => "kaY",
        kaDyE => "kaDyE",
        kaDyEn => "kaDyEn",
        kamul => "kamu~l",
        kasun => "kasu~n",
        kap => "kap",
        kase => "kase",
        kasen => "kasen",
        kAnac => "kAnac",
        ki => "ki",
        kin => "kin",
        kurac => "kurac",
        kelimar => "kelimar",
        kta => "kta",
        ktavatu => "ktavatu~",
        ktic => "ktic",
        ktin => "ktin",
        ktri => "ktri",
        ktvA => "ktvA",
        knu => "knu",
        kmarac => "kmarac",
        kyap => "kyap",
        kru => "kru",
        krukan => "krukan",
        klukan => "klukan",
        kvanip => "kvani~p",
        kvarap => "kvarap",
        kvasu => "kvasu~",
        kvin => "kvi~n",
        kvip => "kvi~p",
        ksnu => "ksnu",
        Kac => "Kac",
        KaS => "KaS",
        KizRuc => "KizRuc",
        KukaY => "KukaY",
        Kyun => "Kyu~n",
        Kal => "Kal",
        Ga => "Ga",
        GaY => "GaY",
        GinuR => "Ginu~R",
        Gurac => "Gurac",
        Nvanip => "Nvani~p",
        Yyuw => "Yyu~w",
        wa => "wa",
        wak => "wak",
        qa => "qa",
        qara => "qara",
        qu => "qu",
        Ra => "Ra",
        Ramul => "Ramu~l",
        Rini => "Rini~",
        Ryat => "Ryat",
        Ryuw => "Ryu~w",
        Rvi => "Rvi~",
        Rvuc => "Rvu~c",
        Rvul => "Rvu~l",
        taveN => "taveN",
        taven => "taven",
        tavE => "tavE",
        tavya => "tavya",
        tavyat => "tavyat",
        tumun => "tumu~n",
        tfc => "tfc",
        tfn => "tfn",
        tosun => "tosu~n",
        Takan => "Takan",
        naN => "naN",
        najiN => "naji~N",
        nan => "nan",
        ni => "ni",
        manin => "mani~n",
        yat => "yat",
        yuc => "yu~c",
        ra => "ra",
        ru => "ru",
        lyu => "lyu~",
        lyuw => "lyu~w",
        vanip => "vani~p",
        varac => "varac",
        vic => "vi~c",
        viw => "vi~w",
        vuY => "vu~Y",
        vun => "vu~n",
        Sa => "Sa",
        Satf => "Satf~",
        SaDyE => "SaDyE",
        SaDyEn => "SaDyEn",
        SAnac => "SAnac",
        SAnan => "SAnan",
        zAkan => "zAkan",
        zwran => "zwran",
        zvun => "zvu~n",
        se => "se",
        sen => "sen",
    }
}

category! {
    /// Secondary (taddhita) suffixes that derive nominal stems from stems.
    #[allow(non_camel_case_types)]
    Taddhita, "taddhita" {
        a => "a",
        akac => "akac",
        ac => "ac",
        aWac => "aWac",
        aY => "aY",
        aR => "aR",
        at => "at",
        atasuc => "atasu~c",
        anic => "ani~c",
        ap => "ap",
        asic => "asi~c",
        astAti => "astAti~",
        Akinic => "Akini~c",
        Arak => "Arak",
        iY => "iY",
        itac => "itac",
        inac => "inac",
        ini => "ini~",
        imanic => "imani~c",
        ila => "ila",
        ilac => "ilac",
        izWan => "izWan",
        Ikak => "Ikak",
        Ikan => "Ikan",
        Iyasun => "Iyasu~n",
        eRya => "eRya",
        Erak => "Erak",
        ka => "ka",
        kak => "kak",
        kawac => "kawac",
        kap => "kap",
        kan => "kan",
        kalpap => "kalpap",
        kftvasuc => "kftvasu~c",
        kuwArac => "kuwArac",
        kuRap => "kuRap",
        Ka => "Ka",
        KaY => "KaY",
        Ga => "Ga",
        Gac => "Gac",
        Gan => "Gan",
        Gas => "Gas",
        caRap => "caRap",
        caraw => "caraw",
        cuYcup => "cuYcup",
        cPaY => "cPaY",
        cvi => "cvi~",
        Ca => "Ca",
        CaR => "CaR",
        Cas => "Cas",
        jAtIyar => "jAtIyar",
        jAhac => "jAhac",
        Ya => "Ya",
        YiW => "YiW",
        Yya => "Yya",
        YyaN => "YyaN",
        Yyaw => "Yyaw",
        wac => "wac",
        waq => "waq",
        wiWan => "wi~Wan",
        wIwac => "wIwac",
        weRyaR => "weRyaR",
        wyaR => "wyaR",
        wyu => "wyu~",
        wyul => "wyu~l",
        wlaY => "wlaY",
        Wak => "Wak",
        Wac => "Wac",
        WaY => "WaY",
        Wan => "Wan",
        Wap => "Wap",
        qaw => "qaw",
        qati => "qati",
        qatarac => "qatarac",
        qatamac => "qatamac",
        qupac => "qupac",
        qmatup => "qmatu~p",
        qyaR => "qyaR",
        qvalac => "qvalac",
        qvun => "qvu~n",
        Qak => "Qak",
        QakaY => "QakaY",
        Qa => "Qa",
        QaY => "QaY",
        Qinuk => "Qinu~k",
        Qrak => "Qrak",
        Ra => "Ra",
        Rini => "Rini~",
        Rya => "Rya",
        tamap => "tamap",
        tayap => "tayap",
        tarap => "tarap",
        tal => "tal",
        tasi => "tasi~",
        tasil => "tasi~l",
        ti => "ti",
        tikan => "tikan",
        tIya => "tIya",
        tyak => "tyak",
        tyakan => "tyakan",
        tyap => "tyap",
        tyu => "tyu~",
        tyul => "tyu~l",
        tral => "tral",
        trA => "trA",
        tva => "tva",
        Tamu => "Tamu~",
        Tyan => "Tyan",
        TAl => "TAl",
        daGnac => "daGnac",
        dvayasac => "dvayasac",
        dA => "dA",
        dAnIm => "dAnIm",
        deSya => "deSya",
        deSIyar => "deSIyar",
        DA => "DA",
        na => "na",
        nAwac => "nAwac",
        naY => "naY",
        ma => "ma",
        matup => "matu~p",
        map => "map",
        mayaw => "mayaw",
        pASap => "pASap",
        piwac => "piwac",
        Pak => "Pak",
        PaY => "PaY",
        PiY => "PiY",
        bahuc => "bahuc",
        biqac => "biqac",
        birIsac => "birIsac",
        Baktal => "Baktal",
        Brawac => "Brawac",
        mAtrac => "mAtrac",
        ya => "ya",
        yak => "yak",
        yaY => "yaY",
        yat => "yat",
        yan => "yan",
        yus => "yus",
        ra => "ra",
        rhil => "rhil",
        rUpya => "rUpya",
        lac => "lac",
        rUpap => "rUpap",
        vati => "vati~",
        vatup => "vatu~p",
        vaya => "vaya",
        valac => "valac",
        viDal => "viDal",
        vini => "vini~",
        vuk => "vu~k",
        vuY => "vu~Y",
        vun => "vu~n",
        vyat => "vyat",
        vyan => "vyan",
        Sa => "Sa",
        SaNkawac => "SaNkawac",
        SAlac => "SAlac",
        Sas => "Sas",
        za => "za",
        zkan => "zkan",
        zwarac => "zwarac",
        zWac => "zWac",
        zWan => "zWan",
        zWal => "zWal",
        zPak => "zPak",
        zyaN => "zyaN",
        zyaY => "zyaY",
        sa => "sa",
        sna => "sna",
        sAti => "sAti~",
        suc => "su~c",
        snaY => "snaY",
        ha => "ha",
    }
}
