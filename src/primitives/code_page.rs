/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 05/06/2026
License: MIT

Notes: The single "language driver id" byte at offset 29 of a .dbf header
selects the legacy code page the record text was written in. Only the ids
that actually shipped with dBase/FoxPro are representable; anything else is
rejected at parse time. Mapping a code page number to a concrete text
encoding is left to the caller.
*/
use crate::error::{Error, Result};
use std::fmt;

/// The closed set of supported dBase language driver bytes.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DbaseCodePage {
    DosUnitedStates = 0x01,
    DosMultilingual = 0x02,
    WindowsAnsi = 0x03,
    StandardMacintosh = 0x04,
    EasternEuropeanDos = 0x64,
    RussianDos = 0x65,
    NordicDos = 0x66,
    IcelandicDos = 0x67,
    GreekDos = 0x6a,
    TurkishDos = 0x6b,
    RussianMacintosh = 0x96,
    EasternEuropeanMacintosh = 0x97,
    GreekMacintosh = 0x98,
    EasternEuropeanWindows = 0xc8,
    RussianWindows = 0xc9,
    TurkishWindows = 0xca,
    GreekWindows = 0xcb,
}

impl DbaseCodePage {
    /// Parses the language driver byte, rejecting unsupported values.
    pub fn parse(value: u8) -> Result<DbaseCodePage> {
        DbaseCodePage::try_parse(value).ok_or_else(|| {
            Error::invalid(
                "code page",
                format!("0x{:02x} is not a supported dBase language driver id", value),
            )
        })
    }

    pub fn try_parse(value: u8) -> Option<DbaseCodePage> {
        let page = match value {
            0x01 => DbaseCodePage::DosUnitedStates,
            0x02 => DbaseCodePage::DosMultilingual,
            0x03 => DbaseCodePage::WindowsAnsi,
            0x04 => DbaseCodePage::StandardMacintosh,
            0x64 => DbaseCodePage::EasternEuropeanDos,
            0x65 => DbaseCodePage::RussianDos,
            0x66 => DbaseCodePage::NordicDos,
            0x67 => DbaseCodePage::IcelandicDos,
            0x6a => DbaseCodePage::GreekDos,
            0x6b => DbaseCodePage::TurkishDos,
            0x96 => DbaseCodePage::RussianMacintosh,
            0x97 => DbaseCodePage::EasternEuropeanMacintosh,
            0x98 => DbaseCodePage::GreekMacintosh,
            0xc8 => DbaseCodePage::EasternEuropeanWindows,
            0xc9 => DbaseCodePage::RussianWindows,
            0xca => DbaseCodePage::TurkishWindows,
            0xcb => DbaseCodePage::GreekWindows,
            _ => return None,
        };
        Some(page)
    }

    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    /// The code page number an external text-encoding resolver can use.
    pub fn code_page_number(&self) -> u16 {
        match self {
            DbaseCodePage::DosUnitedStates => 437,
            DbaseCodePage::DosMultilingual => 850,
            DbaseCodePage::WindowsAnsi => 1252,
            DbaseCodePage::StandardMacintosh => 10000,
            DbaseCodePage::EasternEuropeanDos => 852,
            DbaseCodePage::RussianDos => 866,
            DbaseCodePage::NordicDos => 865,
            DbaseCodePage::IcelandicDos => 861,
            DbaseCodePage::GreekDos => 737,
            DbaseCodePage::TurkishDos => 857,
            DbaseCodePage::RussianMacintosh => 10007,
            DbaseCodePage::EasternEuropeanMacintosh => 10029,
            DbaseCodePage::GreekMacintosh => 10006,
            DbaseCodePage::EasternEuropeanWindows => 1250,
            DbaseCodePage::RussianWindows => 1251,
            DbaseCodePage::TurkishWindows => 1254,
            DbaseCodePage::GreekWindows => 1253,
        }
    }
}

impl fmt::Display for DbaseCodePage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02x} (cp{})", self.to_byte(), self.code_page_number())
    }
}
