//! Generated x-windows-950 mapping data.
//!
//! One `(code point, encoded bytes)` pair per repertoire entry, sorted by code
//! point. Regenerate rather than edit by hand.

#[rustfmt::skip]
pub(crate) static WINDOWS_950: &[(u32, &[u8])] = &[
    (0x0000, &[0x00]), (0x0001, &[0x01]), (0x0002, &[0x02]), (0x0003, &[0x03]),
    (0x0004, &[0x04]), (0x0005, &[0x05]), (0x0006, &[0x06]), (0x0007, &[0x07]),
    (0x0008, &[0x08]), (0x0009, &[0x09]), (0x000A, &[0x0A]), (0x000B, &[0x0B]),
    (0x000C, &[0x0C]), (0x000D, &[0x0D]), (0x000E, &[0x0E]), (0x000F, &[0x0F]),
    (0x0010, &[0x10]), (0x0011, &[0x11]), (0x0012, &[0x12]), (0x0013, &[0x13]),
    (0x0014, &[0x14]), (0x0015, &[0x15]), (0x0016, &[0x16]), (0x0017, &[0x17]),
    (0x0018, &[0x18]), (0x0019, &[0x19]), (0x001A, &[0x1A]), (0x001B, &[0x1B]),
    (0x001C, &[0x1C]), (0x001D, &[0x1D]), (0x001E, &[0x1E]), (0x001F, &[0x1F]),
    (0x0020, &[0x20]), (0x0021, &[0x21]), (0x0022, &[0x22]), (0x0023, &[0x23]),
    (0x0024, &[0x24]), (0x0025, &[0x25]), (0x0026, &[0x26]), (0x0027, &[0x27]),
    (0x0028, &[0x28]), (0x0029, &[0x29]), (0x002A, &[0x2A]), (0x002B, &[0x2B]),
    (0x002C, &[0x2C]), (0x002D, &[0x2D]), (0x002E, &[0x2E]), (0x002F, &[0x2F]),
    (0x0030, &[0x30]), (0x0031, &[0x31]), (0x0032, &[0x32]), (0x0033, &[0x33]),
    (0x0034, &[0x34]), (0x0035, &[0x35]), (0x0036, &[0x36]), (0x0037, &[0x37]),
    (0x0038, &[0x38]), (0x0039, &[0x39]), (0x003A, &[0x3A]), (0x003B, &[0x3B]),
    (0x003C, &[0x3C]), (0x003D, &[0x3D]), (0x003E, &[0x3E]), (0x003F, &[0x3F]),
    (0x0040, &[0x40]), (0x0041, &[0x41]), (0x0042, &[0x42]), (0x0043, &[0x43]),
    (0x0044, &[0x44]), (0x0045, &[0x45]), (0x0046, &[0x46]), (0x0047, &[0x47]),
    (0x0048, &[0x48]), (0x0049, &[0x49]), (0x004A, &[0x4A]), (0x004B, &[0x4B]),
    (0x004C, &[0x4C]), (0x004D, &[0x4D]), (0x004E, &[0x4E]), (0x004F, &[0x4F]),
    (0x0050, &[0x50]), (0x0051, &[0x51]), (0x0052, &[0x52]), (0x0053, &[0x53]),
    (0x0054, &[0x54]), (0x0055, &[0x55]), (0x0056, &[0x56]), (0x0057, &[0x57]),
    (0x0058, &[0x58]), (0x0059, &[0x59]), (0x005A, &[0x5A]), (0x005B, &[0x5B]),
    (0x005C, &[0x5C]), (0x005D, &[0x5D]), (0x005E, &[0x5E]), (0x005F, &[0x5F]),
    (0x0060, &[0x60]), (0x0061, &[0x61]), (0x0062, &[0x62]), (0x0063, &[0x63]),
    (0x0064, &[0x64]), (0x0065, &[0x65]), (0x0066, &[0x66]), (0x0067, &[0x67]),
    (0x0068, &[0x68]), (0x0069, &[0x69]), (0x006A, &[0x6A]), (0x006B, &[0x6B]),
    (0x006C, &[0x6C]), (0x006D, &[0x6D]), (0x006E, &[0x6E]), (0x006F, &[0x6F]),
    (0x0070, &[0x70]), (0x0071, &[0x71]), (0x0072, &[0x72]), (0x0073, &[0x73]),
    (0x0074, &[0x74]), (0x0075, &[0x75]), (0x0076, &[0x76]), (0x0077, &[0x77]),
    (0x0078, &[0x78]), (0x0079, &[0x79]), (0x007A, &[0x7A]), (0x007B, &[0x7B]),
    (0x007C, &[0x7C]), (0x007D, &[0x7D]), (0x007E, &[0x7E]), (0x007F, &[0x7F]),
    (0x00A7, &[0xA1, 0xB1]), (0x00AF, &[0xA1, 0xC2]), (0x00B0, &[0xA2, 0x58]), (0x00B1, &[0xA1, 0xD3]),
    (0x00B7, &[0xA1, 0x50]), (0x00D7, &[0xA1, 0xD1]), (0x00F7, &[0xA1, 0xD2]), (0x02C7, &[0xA3, 0xBE]),
    (0x02C9, &[0xA3, 0xBC]), (0x0391, &[0xA3, 0x44]), (0x03B1, &[0xA3, 0x5C]), (0x2013, &[0xA1, 0x56]),
    (0x2032, &[0xA1, 0xAC]), (0x20AC, &[0xA3, 0xE1]), (0x2103, &[0xA2, 0x4A]), (0x2160, &[0xA2, 0xB9]),
    (0x2190, &[0xA1, 0xF6]), (0x2215, &[0xA2, 0x41]), (0x2234, &[0xA1, 0xEF]), (0x2252, &[0xA1, 0xDC]),
    (0x2295, &[0xA1, 0xF2]), (0x22BF, &[0xA1, 0xE9]), (0x2500, &[0xA2, 0x77]), (0x2524, &[0xA2, 0x74]),
    (0x2550, &[0xA2, 0xA4]), (0x256E, &[0xA2, 0xA1]), (0x258C, &[0xA2, 0x6D]), (0x25B2, &[0xA1, 0xB6]),
    (0x25E2, &[0xA2, 0xA8]), (0x2605, &[0xA1, 0xB9]), (0x2640, &[0xA1, 0xF0]), (0x3000, &[0xA1, 0x40]),
    (0x301E, &[0xA1, 0xAA]), (0x3105, &[0xA3, 0x74]), (0x3123, &[0xA3, 0xB4]), (0x32A3, &[0xA1, 0xC0]),
    (0x338E, &[0xA2, 0x55]), (0x33C4, &[0xA2, 0x57]), (0x4E00, &[0xA4, 0x40]), (0x4E1E, &[0xA5, 0xE0]),
    (0x4E3C, &[0xC9, 0x64]), (0x4E5C, &[0xC9, 0x41]), (0x4E7E, &[0xB0, 0xAE]), (0x4E9E, &[0xA8, 0xC8]),
    (0x4EC0, &[0xA4, 0xB0]), (0x4EDE, &[0xA5, 0x51]), (0x4EFD, &[0xA5, 0xF7]), (0x4F1D, &[0xC9, 0xB4]),
    (0x4F3B, &[0xCA, 0x5B]), (0x4F59, &[0xA7, 0x45]), (0x4F77, &[0xCB, 0xBC]), (0x4F95, &[0xCB, 0xCA]),
    (0x4FB3, &[0xCD, 0xE8]), (0x4FD1, &[0xAB, 0x4D]), (0x4FEF, &[0xAD, 0xC1]), (0x500D, &[0xAD, 0xBF]),
    (0x502B, &[0xAD, 0xDB]), (0x5049, &[0xB0, 0xB6]), (0x5068, &[0xD8, 0x5B]), (0x5087, &[0xD8, 0x5F]),
    (0x50AC, &[0xB6, 0xCA]), (0x50CA, &[0xDC, 0xB9]), (0x50E8, &[0xE0, 0xF3]), (0x5106, &[0xE4, 0xEA]),
    (0x5124, &[0xEC, 0xBC]), (0x5143, &[0xA4, 0xB8]), (0x5161, &[0xA2, 0x5D]), (0x5180, &[0xBE, 0xAC]),
    (0x519E, &[0xCB, 0xCD]), (0x51BC, &[0xCB, 0xCE]), (0x51DC, &[0xBB, 0xFE]), (0x51FA, &[0xA5, 0x58]),
    (0x521C, &[0xCA, 0x6C]), (0x523A, &[0xA8, 0xEB]), (0x525A, &[0xD0, 0xE7]), (0x5278, &[0xDC, 0xC7]),
    (0x5296, &[0xF1, 0xED]), (0x52BB, &[0xA8, 0xF1]), (0x52D9, &[0xB0, 0xC8]), (0x52F7, &[0xF1, 0xEE]),
    (0x5315, &[0xA4, 0x50]), (0x5334, &[0xE8, 0xFA]), (0x5352, &[0xA8, 0xF2]), (0x5370, &[0xA6, 0x4C]),
    (0x538E, &[0xCA, 0x74]), (0x53AC, &[0xE1, 0x46]), (0x53CA, &[0xA4, 0xCE]), (0x53E8, &[0xA5, 0x6F]),
    (0x5406, &[0xA6, 0x5B]), (0x5424, &[0xCA, 0xA5]), (0x5442, &[0xA7, 0x66]), (0x5460, &[0xCB, 0xEB]),
    (0x547E, &[0xCB, 0xE3]), (0x54A0, &[0xCE, 0x48]), (0x54BE, &[0xCE, 0x4C]), (0x54DE, &[0xCE, 0x4E]),
    (0x54FC, &[0xAD, 0xF3]), (0x551A, &[0xD0, 0xF7]), (0x5538, &[0xB0, 0xE1]), (0x5556, &[0xB0, 0xDC]),
    (0x5575, &[0xD4, 0x71]), (0x5593, &[0xD8, 0x6D]), (0x55B1, &[0xB3, 0xED]), (0x55CF, &[0xDC, 0xD8]),
    (0x55EF, &[0xB6, 0xE2]), (0x560D, &[0xB9, 0xC6]), (0x562C, &[0xE5, 0x44]), (0x564A, &[0xE4, 0xFB]),
    (0x5668, &[0xBE, 0xB9]), (0x5686, &[0xEC, 0xC3]), (0x56A5, &[0xC3, 0x60]), (0x56C3, &[0xF5, 0xC4]),
    (0x56E1, &[0xC9, 0xC6]), (0x56FF, &[0xAB, 0xAA]), (0x571E, &[0xF9, 0x6B]), (0x573E, &[0xA7, 0xA3]),
    (0x5761, &[0xA9, 0x59]), (0x5780, &[0xCB, 0xF9]), (0x579E, &[0xCE, 0x51]), (0x57BC, &[0xD1, 0x51]),
    (0x57DC, &[0xD4, 0xB1]), (0x57FA, &[0xB0, 0xF2]), (0x5819, &[0xD8, 0xA1]), (0x5837, &[0xD8, 0x7E]),
    (0x5855, &[0xDC, 0xE9]), (0x5874, &[0xE1, 0x5D]), (0x5893, &[0xB9, 0xD3]), (0x58B1, &[0xE5, 0x4C]),
    (0x58CF, &[0xEC, 0xCC]), (0x58EF, &[0xA7, 0xA7]), (0x590D, &[0xCE, 0x60]), (0x592B, &[0xA4, 0xD2]),
    (0x5949, &[0xA9, 0x5E]), (0x5967, &[0xB6, 0xF8]), (0x5985, &[0xC9, 0xCE]), (0x59A3, &[0xA7, 0xAD]),
    (0x59C1, &[0xCC, 0x4A]), (0x59E0, &[0xCE, 0x73]), (0x59FE, &[0xCE, 0x74]), (0x5A1C, &[0xAE, 0x52]),
    (0x5A3C, &[0xB1, 0x40]), (0x5A5A, &[0xB1, 0x42]), (0x5A78, &[0xD8, 0xBB]), (0x5A97, &[0xD8, 0xC5]),
    (0x5AB5, &[0xDC, 0xF9]), (0x5AD5, &[0xE1, 0x6E]), (0x5AF3, &[0xE1, 0x73]), (0x5B13, &[0xE9, 0x56]),
    (0x5B32, &[0xEC, 0xD0]), (0x5B50, &[0xA4, 0x6C]), (0x5B6E, &[0xD4, 0xF0]), (0x5B8C, &[0xA7, 0xB9]),
    (0x5BAC, &[0xD1, 0x68]), (0x5BCA, &[0xD8, 0xD5]), (0x5BE8, &[0xB9, 0xEB]), (0x5C07, &[0xB1, 0x4E]),
    (0x5C25, &[0xC9, 0xD5]), (0x5C44, &[0xCC, 0x59]), (0x5C62, &[0xB9, 0xF0]), (0x5C86, &[0xCA, 0xC7]),
    (0x5CA4, &[0xCC, 0x5C]), (0x5CC6, &[0xCE, 0xAB]), (0x5CE8, &[0xAE, 0x6F]), (0x5D06, &[0xB1, 0x53]),
    (0x5D24, &[0xB1, 0x5C]), (0x5D42, &[0xD8, 0xE9]), (0x5D62, &[0xDD, 0x56]), (0x5D80, &[0xE1, 0xA4]),
    (0x5D9E, &[0xE5, 0x6D]), (0x5DBC, &[0xC0, 0xAC]), (0x5DDD, &[0xA4, 0x74]), (0x5DFD, &[0xB4, 0x53]),
    (0x5E1B, &[0xA9, 0xAD]), (0x5E3D, &[0xB4, 0x55]), (0x5E5B, &[0xB9, 0xF3]), (0x5E79, &[0xB7, 0x46]),
    (0x5E97, &[0xA9, 0xB1]), (0x5EB5, &[0xB1, 0x67]), (0x5ED3, &[0xB9, 0xF8]), (0x5EF1, &[0xF5, 0xCB]),
    (0x5F0F, &[0xA6, 0xA1]), (0x5F2D, &[0xAB, 0xDA]), (0x5F4B, &[0xE9, 0x74]), (0x5F69, &[0xB1, 0x6D]),
    (0x5F87, &[0xAB, 0xE0]), (0x5FA5, &[0xD8, 0xF6]), (0x5FC3, &[0xA4, 0xDF]), (0x5FE1, &[0xCA, 0xDD]),
    (0x5FFF, &[0xA9, 0xC1]), (0x601D, &[0xAB, 0xE4]), (0x6040, &[0xCE, 0xCA]), (0x605E, &[0xCE, 0xC3]),
    (0x607F, &[0xB1, 0x76]), (0x609D, &[0xD1, 0xA7]), (0x60BB, &[0xB1, 0xA2]), (0x60D9, &[0xD5, 0x5B]),
    (0x60F7, &[0xDD, 0x65]), (0x6115, &[0xB4, 0x6A]), (0x6134, &[0xB7, 0x5B]), (0x6152, &[0xE1, 0xC8]),
    (0x6170, &[0xBC, 0xA2]), (0x618E, &[0xBC, 0xA8]), (0x61AC, &[0xBC, 0xA9]), (0x61CA, &[0xBE, 0xD2]),
    (0x61E8, &[0xEC, 0xE6]), (0x6207, &[0xF9, 0xBA]), (0x6225, &[0xDD, 0x75]), (0x6243, &[0xCE, 0xD3]),
    (0x6261, &[0xC9, 0xE6]), (0x627F, &[0xA9, 0xD3]), (0x62A8, &[0xA9, 0xE1]), (0x62C6, &[0xA9, 0xEE]),
    (0x62EB, &[0xCE, 0xDA]), (0x6309, &[0xAB, 0xF6]), (0x6328, &[0xAE, 0xC1]), (0x6346, &[0xAE, 0xB9]),
    (0x6365, &[0xD5, 0x67]), (0x6383, &[0xB1, 0xBD]), (0x63A1, &[0xB1, 0xC4]), (0x63C0, &[0xB4, 0x7A]),
    (0x63DF, &[0xD9, 0x63]), (0x6406, &[0xB7, 0x70]), (0x6424, &[0xDD, 0x7E]), (0x6443, &[0xDD, 0xA2]),
    (0x6461, &[0xD9, 0x62]), (0x647F, &[0xE1, 0xED]), (0x649D, &[0xD9, 0x5A]), (0x64BB, &[0xBE, 0xD8]),
    (0x64D9, &[0xE9, 0xAE]), (0x64F7, &[0xC2, 0x5E]), (0x6515, &[0xF4, 0x4D]), (0x6533, &[0xE9, 0xAF]),
    (0x6551, &[0xB1, 0xCF]), (0x656F, &[0xDD, 0xBC]), (0x6590, &[0xB4, 0xB4]), (0x65AE, &[0xD9, 0x7C]),
    (0x65CC, &[0xB1, 0xDC]), (0x65EC, &[0xA6, 0xAF]), (0x660A, &[0xA9, 0xFE]), (0x6628, &[0xAC, 0x51]),
    (0x6647, &[0xD1, 0xD5]), (0x6665, &[0xD5, 0xA9]), (0x6684, &[0xB7, 0x79]), (0x66A2, &[0xBA, 0x5A]),
    (0x66C0, &[0xE9, 0xB5]), (0x66DE, &[0xF2, 0x4B]), (0x66FC, &[0xB0, 0xD2]), (0x671B, &[0xB1, 0xE6]),
    (0x6739, &[0xC9, 0xF0]), (0x6757, &[0xA8, 0x41]), (0x6775, &[0xAA, 0x53]), (0x6793, &[0xAA, 0x55]),
    (0x67B2, &[0xCF, 0x56]), (0x67D0, &[0xAC, 0x59]), (0x67EE, &[0xCF, 0x4F]), (0x6812, &[0xD1, 0xEC]),
    (0x6831, &[0xD1, 0xE2]), (0x684F, &[0xD1, 0xE0]), (0x686D, &[0xD5, 0xB4]), (0x688B, &[0xD5, 0xCC]),
    (0x68A9, &[0xD5, 0xBC]), (0x68C7, &[0xD9, 0xD9]), (0x68E6, &[0xD9, 0xD1]), (0x6904, &[0xD9, 0xAC]),
    (0x6925, &[0xD9, 0xD8]), (0x6944, &[0xDD, 0xE4]), (0x6962, &[0xDD, 0xCD]), (0x6982, &[0xB7, 0xA7]),
    (0x69A0, &[0xE2, 0x40]), (0x69BE, &[0xE2, 0x4C]), (0x69E2, &[0xE5, 0xD5]), (0x6A00, &[0xE5, 0xCA]),
    (0x6A1E, &[0xBC, 0xCF]), (0x6A3C, &[0xE9, 0xD7]), (0x6A5A, &[0xE9, 0xCB]), (0x6A7E, &[0xC0, 0xCF]),
    (0x6A9C, &[0xC0, 0xCC]), (0x6ABA, &[0xEF, 0xE2]), (0x6AD9, &[0xF2, 0x50]), (0x6AF8, &[0xF5, 0xD1]),
    (0x6B16, &[0xC6, 0x56]), (0x6B34, &[0xD1, 0xF9]), (0x6B54, &[0xE9, 0xDF]), (0x6B72, &[0xB7, 0xB3]),
    (0x6B91, &[0xD5, 0xDA]), (0x6BAF, &[0xC2, 0x6C]), (0x6BCD, &[0xA5, 0xC0]), (0x6BEB, &[0xB2, 0x40]),
    (0x6C09, &[0xED, 0x4D]), (0x6C27, &[0xAE, 0xF1]), (0x6C46, &[0xC9, 0xF8]), (0x6C65, &[0xCB, 0x5B]),
    (0x6C83, &[0xA8, 0x55]), (0x6CAB, &[0xAA, 0x6A]), (0x6CC9, &[0xAC, 0x75]), (0x6CE7, &[0xCC, 0xF6]),
    (0x6D07, &[0xCF, 0xA7]), (0x6D25, &[0xAC, 0x7A]), (0x6D58, &[0xD2, 0x4C]), (0x6D76, &[0xD2, 0x48]),
    (0x6D94, &[0xAF, 0x4B]), (0x6DB2, &[0xB2, 0x47]), (0x6DD0, &[0xD6, 0x40]), (0x6DEE, &[0xB2, 0x61]),
    (0x6E19, &[0xB5, 0x41]), (0x6E38, &[0xB4, 0xE5]), (0x6E56, &[0xB4, 0xF2]), (0x6E74, &[0xD5, 0xE4]),
    (0x6E92, &[0xDE, 0x5F]), (0x6EB0, &[0xDE, 0x55]), (0x6ECE, &[0xE2, 0x6C]), (0x6EEC, &[0xBA, 0xAD]),
    (0x6F0A, &[0xE2, 0x7E]), (0x6F29, &[0xBA, 0x78]), (0x6F4E, &[0xE2, 0x76]), (0x6F6C, &[0xE6, 0x49]),
    (0x6F8B, &[0xE6, 0x5A]), (0x6FA9, &[0xED, 0x4F]), (0x6FC7, &[0xE9, 0xEC]), (0x6FE6, &[0xED, 0x56]),
    (0x7004, &[0xE9, 0xF6]), (0x7022, &[0xF2, 0x62]), (0x7040, &[0xF4, 0x66]), (0x705E, &[0xC5, 0xF4]),
    (0x707C, &[0xA8, 0x60]), (0x709A, &[0xCD, 0x59]), (0x70B8, &[0xAC, 0xB5]), (0x70D7, &[0xD2, 0x71]),
    (0x70F6, &[0xD6, 0x58]), (0x7117, &[0xD6, 0x4B]), (0x7136, &[0xB5, 0x4D]), (0x7154, &[0xDE, 0x6C]),
    (0x7172, &[0xDE, 0x73]), (0x7190, &[0xE2, 0xBB]), (0x71AF, &[0xE6, 0x63]), (0x71CE, &[0xBF, 0x52]),
    (0x71EC, &[0xC0, 0xEC]), (0x720A, &[0xF2, 0x6A]), (0x7228, &[0xC6, 0x79]), (0x7246, &[0xC0, 0xF0]),
    (0x7267, &[0xAA, 0xAA]), (0x7285, &[0xDA, 0x6B]), (0x72A3, &[0xF2, 0x71]), (0x72C1, &[0xCB, 0x65]),
    (0x72DF, &[0xCF, 0xC2]), (0x72FD, &[0xAF, 0x56]), (0x731B, &[0xB2, 0x72]), (0x733A, &[0xDE, 0xAD]),
    (0x7358, &[0xE6, 0x75]), (0x7376, &[0xEF, 0xFE]), (0x7394, &[0xCB, 0x6B]), (0x73B2, &[0xAC, 0xC2]),
    (0x73D2, &[0xD2, 0xB4]), (0x73F4, &[0xD6, 0x78]), (0x7416, &[0xDA, 0x7E]), (0x7434, &[0xB5, 0x5E]),
    (0x7452, &[0xDE, 0xB4]), (0x7470, &[0xBA, 0xC0]), (0x7490, &[0xED, 0x69]), (0x74AF, &[0xED, 0x6E]),
    (0x74CF, &[0xC4, 0x6E]), (0x74EE, &[0xCF, 0xD8]), (0x750C, &[0xBF, 0x5E]), (0x752A, &[0xCA, 0x46]),
    (0x7548, &[0xCF, 0xDB]), (0x7566, &[0xB2, 0xA5]), (0x7584, &[0xED, 0x73]), (0x75A2, &[0xAC, 0xCF]),
    (0x75C0, &[0xD2, 0xC7]), (0x75DE, &[0xB5, 0x6C]), (0x75FC, &[0xDE, 0xCC]), (0x761A, &[0xE6, 0xB5]),
    (0x7638, &[0xBF, 0x61]), (0x7656, &[0xC2, 0x7D]), (0x7675, &[0xF9, 0xCC]), (0x7693, &[0xB5, 0x71]),
    (0x76B4, &[0xB5, 0x72]), (0x76D2, &[0xB2, 0xB0]), (0x76F0, &[0xCD, 0x78]), (0x7710, &[0xD2, 0xCF]),
    (0x772F, &[0xD6, 0xA9]), (0x774D, &[0xDA, 0xBD]), (0x776B, &[0xB7, 0xFB]), (0x7789, &[0xE6, 0xBE]),
    (0x77A7, &[0xC1, 0x40]), (0x77C7, &[0xC3, 0xA9]), (0x77E5, &[0xAA, 0xBE]), (0x7803, &[0xCF, 0xF2]),
    (0x7821, &[0xD2, 0xE1]), (0x7843, &[0xB2, 0xB9]), (0x7862, &[0xDA, 0xD1]), (0x7880, &[0xDE, 0xF0]),
    (0x789E, &[0xE2, 0xF2]), (0x78BC, &[0xBD, 0x58]), (0x78DA, &[0xBF, 0x6A]), (0x78F9, &[0xED, 0xAC]),
    (0x7917, &[0xF2, 0xA3]), (0x7935, &[0xF6, 0xF6]), (0x7953, &[0xD2, 0xEA]), (0x7972, &[0xDA, 0xD4]),
    (0x7990, &[0xE3, 0x43]), (0x79AE, &[0xC2, 0xA7]), (0x79CD, &[0xCF, 0xFA]), (0x79EB, &[0xD2, 0xED]),
    (0x7A0A, &[0xDA, 0xD7]), (0x7A28, &[0xE3, 0x48]), (0x7A46, &[0xBF, 0x70]), (0x7A67, &[0xF2, 0xA6]),
    (0x7A85, &[0xD2, 0xF8]), (0x7AA3, &[0xDF, 0x42]), (0x7AC1, &[0xED, 0xB9]), (0x7ADF, &[0xB3, 0xBA]),
    (0x7AFD, &[0xAC, 0xF2]), (0x7B1B, &[0xB2, 0xC3]), (0x7B3B, &[0xDA, 0xDF]), (0x7B60, &[0xB8, 0x61]),
    (0x7B82, &[0xE3, 0x5D]), (0x7BA0, &[0xBD, 0x69]), (0x7BBE, &[0xE6, 0xD8]), (0x7BDC, &[0xEA, 0xC3]),
    (0x7BFB, &[0xED, 0xBF]), (0x7C19, &[0xF0, 0x63]), (0x7C37, &[0xC3, 0xB2]), (0x7C57, &[0xF6, 0xFA]),
    (0x7C75, &[0xCD, 0xA8]), (0x7C94, &[0xD6, 0xDE]), (0x7CB2, &[0xDF, 0x54]), (0x7CD0, &[0xEA, 0xCA]),
    (0x7CEE, &[0xF4, 0xAB]), (0x7D0C, &[0xD3, 0x5A]), (0x7D2B, &[0xB5, 0xB5]), (0x7D4A, &[0xD6, 0xEE]),
    (0x7D68, &[0xB5, 0xB3]), (0x7D86, &[0xDF, 0x58]), (0x7DA6, &[0xE3, 0x75]), (0x7DC4, &[0xE3, 0x6C]),
    (0x7DE3, &[0xBD, 0x74]), (0x7E03, &[0xE6, 0xE9]), (0x7E21, &[0xEA, 0xCD]), (0x7E3F, &[0xC1, 0x68]),
    (0x7E5E, &[0xC2, 0xB6]), (0x7E7C, &[0xC4, 0x7E]), (0x7E9A, &[0xF8, 0xFE]), (0x7F36, &[0xA6, 0xCE]),
    (0x7F54, &[0xAA, 0xC9]), (0x7F72, &[0xB8, 0x70]), (0x7F91, &[0xD0, 0x4E]), (0x7FAF, &[0xBD, 0x7E]),
    (0x7FCD, &[0xD6, 0xF8]), (0x7FEB, &[0xE6, 0xF6]), (0x800B, &[0xB5, 0xC0]), (0x8029, &[0xEA, 0xE6]),
    (0x8047, &[0xD7, 0x42]), (0x8067, &[0xE6, 0xFC]), (0x8085, &[0xB5, 0xC2]), (0x80A3, &[0xCD, 0xAD]),
    (0x80C2, &[0xD0, 0x5B]), (0x80E0, &[0xD0, 0x58]), (0x80FE, &[0xDB, 0x48]), (0x811D, &[0xD7, 0x50]),
    (0x813D, &[0xDB, 0x4F]), (0x815B, &[0xDF, 0x77]), (0x8179, &[0xB8, 0xA1]), (0x8197, &[0xE7, 0x44]),
    (0x81B5, &[0xEA, 0xEC]), (0x81D5, &[0xF2, 0xC2]), (0x81F3, &[0xA6, 0xDC]), (0x8211, &[0xD7, 0x52]),
    (0x822F, &[0xD3, 0x71]), (0x824E, &[0xE7, 0x4A]), (0x826C, &[0xF7, 0xEF]), (0x828A, &[0xCB, 0xA1]),
    (0x82A8, &[0xCD, 0xBF]), (0x82D1, &[0xAD, 0x62]), (0x82EF, &[0xAD, 0x66]), (0x830D, &[0xCE, 0x41]),
    (0x832B, &[0xAF, 0xED]), (0x8349, &[0xAF, 0xF3]), (0x8373, &[0xD7, 0x5E]), (0x8392, &[0xB2, 0xF7]),
    (0x83B0, &[0xD7, 0x74]), (0x83CE, &[0xDB, 0x74]), (0x83EC, &[0xDB, 0xA8]), (0x840A, &[0xB5, 0xDC]),
    (0x8429, &[0xDF, 0xC7]), (0x8447, &[0xDF, 0xD7]), (0x8465, &[0xDF, 0xB0]), (0x8486, &[0xDF, 0xB3]),
    (0x84A4, &[0xE3, 0xAD]), (0x84C2, &[0xE3, 0xB2]), (0x84E7, &[0xE7, 0x73]), (0x8506, &[0xBD, 0xB7]),
    (0x8524, &[0xE7, 0x4C]), (0x8543, &[0xBF, 0xBB]), (0x8561, &[0xEA, 0xFD]), (0x8580, &[0xED, 0xF4]),
    (0x859E, &[0xED, 0xFE]), (0x85BD, &[0xF0, 0xAB]), (0x85DC, &[0xF2, 0xD4]), (0x85FA, &[0xC4, 0xA9]),
    (0x8618, &[0xF5, 0xF1]), (0x8636, &[0xF7, 0x4C]), (0x8654, &[0xB0, 0x40]), (0x8673, &[0xD0, 0xA9]),
    (0x8691, &[0xD3, 0xBD]), (0x86AF, &[0xB3, 0x4C]), (0x86D0, &[0xB5, 0xF1]), (0x86F5, &[0xDF, 0xE8]),
    (0x8713, &[0xB8, 0xBB]), (0x8731, &[0xE3, 0xEB]), (0x874F, &[0xE7, 0xBB]), (0x876D, &[0xE7, 0xAF]),
    (0x878D, &[0xBF, 0xC4]), (0x87AB, &[0xC1, 0xB1]), (0x87C9, &[0xEE, 0x62]), (0x87E7, &[0xF0, 0xBB]),
    (0x8805, &[0xC3, 0xC7]), (0x8823, &[0xC4, 0xF7]), (0x8841, &[0xD0, 0xAA]), (0x8861, &[0xBF, 0xC5]),
    (0x887F, &[0xD3, 0xD7]), (0x889E, &[0xB3, 0x4F]), (0x88BC, &[0xDB, 0xCA]), (0x88DA, &[0xDF, 0xF7]),
    (0x88F8, &[0xBB, 0x72]), (0x8916, &[0xE7, 0xCA]), (0x8935, &[0xEE, 0x71]), (0x8953, &[0xF0, 0xD2]),
    (0x8971, &[0xF7, 0x52]), (0x898F, &[0xB3, 0x57]), (0x89AD, &[0xEE, 0x79]), (0x89D2, &[0xA8, 0xA4]),
    (0x89F0, &[0xE7, 0xD2]), (0x8A0E, &[0xB0, 0x51]), (0x8A2C, &[0xD7, 0xCB]), (0x8A4A, &[0xDB, 0xE2]),
    (0x8A68, &[0xB8, 0xE5]), (0x8A86, &[0xE0, 0x46]), (0x8AA4, &[0xBB, 0x7E]), (0x8AC2, &[0xBD, 0xD4]),
    (0x8AE0, &[0xEB, 0x7E]), (0x8AFE, &[0xBF, 0xD5]), (0x8B1C, &[0xEE, 0xAE]), (0x8B3A, &[0xF0, 0xED]),
    (0x8B58, &[0xC3, 0xD1]), (0x8B77, &[0xC5, 0x40]), (0x8B95, &[0xF8, 0xC2]), (0x8C37, &[0xA8, 0xA6]),
    (0x8C55, &[0xA8, 0xA8]), (0x8C73, &[0xC1, 0xC7]), (0x8C91, &[0xEB, 0xB1]), (0x8CAF, &[0xB6, 0x4A]),
    (0x8CCF, &[0xE4, 0x54]), (0x8CED, &[0xBD, 0xE4]), (0x8D0D, &[0xC4, 0xBA]), (0x8D64, &[0xA8, 0xAA]),
    (0x8D84, &[0xDB, 0xED]), (0x8DA3, &[0xBD, 0xEC]), (0x8DC1, &[0xD7, 0xDA]), (0x8DDF, &[0xB8, 0xF2]),
    (0x8DFD, &[0xE4, 0x5B]), (0x8E1B, &[0xE7, 0xF9]), (0x8E39, &[0xBF, 0xE5]), (0x8E57, &[0xF0, 0xFA]),
    (0x8E76, &[0xC3, 0xDD]), (0x8E94, &[0xF7, 0x5E]), (0x8EB2, &[0xB8, 0xFA]), (0x8ED1, &[0xD3, 0xE8]),
    (0x8EEF, &[0xDB, 0xFC]), (0x8F0D, &[0xE4, 0x67]), (0x8F2C, &[0xE8, 0x47]), (0x8F4B, &[0xF1, 0x49]),
    (0x8F9B, &[0xA8, 0xAF]), (0x8FBF, &[0xCB, 0xA6]), (0x8FE0, &[0xD0, 0xB6]), (0x8FFE, &[0xD3, 0xEA]),
    (0x901C, &[0xD7, 0xE5]), (0x903C, &[0xB9, 0x47]), (0x905B, &[0xBB, 0xBF]), (0x9079, &[0xEB, 0xD1]),
    (0x9097, &[0xCA, 0x52]), (0x90B5, &[0xAA, 0xF2]), (0x90D4, &[0xD7, 0xEE]), (0x90F2, &[0xD7, 0xEC]),
    (0x9110, &[0xE0, 0xA4]), (0x912E, &[0xE8, 0x5A]), (0x914C, &[0xB0, 0x75]), (0x916A, &[0xB9, 0x54]),
    (0x9189, &[0xBE, 0x4B]), (0x91A7, &[0xF1, 0x50]), (0x91C5, &[0xC6, 0x6F]), (0x91E3, &[0xB3, 0xA8]),
    (0x9201, &[0xDC, 0x62]), (0x9223, &[0xB6, 0x74]), (0x9245, &[0xB9, 0x64]), (0x9263, &[0xE0, 0xC5]),
    (0x9282, &[0xE4, 0xAA]), (0x92A0, &[0xE4, 0x7B]), (0x92C0, &[0xE8, 0x65]), (0x92DE, &[0xE8, 0x7B]),
    (0x92FC, &[0xBF, 0xFB]), (0x931A, &[0xBF, 0xFE]), (0x9338, &[0xEB, 0xE4]), (0x9356, &[0xEE, 0xD1]),
    (0x9375, &[0xC1, 0xE4]), (0x9394, &[0xC2, 0xE8]), (0x93B2, &[0xF1, 0x66]), (0x93D0, &[0xF3, 0x65]),
    (0x93EE, &[0xF3, 0x6E]), (0x940C, &[0xF5, 0x41]), (0x942A, &[0xF6, 0x66]), (0x9448, &[0xF7, 0x6E]),
    (0x9468, &[0xF8, 0xCB]), (0x9577, &[0xAA, 0xF8]), (0x9598, &[0xB9, 0x68]), (0x95B6, &[0xEC, 0x4B]),
    (0x95D4, &[0xC2, 0xF3]), (0x961C, &[0xAA, 0xFA]), (0x963A, &[0xCD, 0xDB]), (0x9658, &[0xB0, 0xA4]),
    (0x9676, &[0xB3, 0xB3]), (0x9694, &[0xB9, 0x6A]), (0x96B3, &[0xF1, 0x6F]), (0x96D2, &[0xBB, 0xDC]),
    (0x96F0, &[0xDC, 0xA8]), (0x970E, &[0xC0, 0x4B]), (0x972C, &[0xF3, 0x7C]), (0x974B, &[0xF9, 0xAD]),
    (0x9769, &[0xAD, 0xB2]), (0x9788, &[0xE8, 0xB3]), (0x97A6, &[0xC2, 0xFE]), (0x97C4, &[0xF8, 0x4F]),
    (0x97E3, &[0xF7, 0x72]), (0x9801, &[0xAD, 0xB6]), (0x9820, &[0xE8, 0xBB]), (0x9841, &[0xEF, 0x45]),
    (0x985F, &[0xF5, 0x51]), (0x98A8, &[0xAD, 0xB7]), (0x98C6, &[0xF6, 0x74]), (0x98E5, &[0xD8, 0x4F]),
    (0x9903, &[0xBB, 0xE5]), (0x9921, &[0xC0, 0x60]), (0x993F, &[0xC3, 0x49]), (0x995E, &[0xC6, 0x61]),
    (0x9996, &[0xAD, 0xBA]), (0x99B4, &[0xB9, 0xA5]), (0x99D2, &[0xBE, 0x73]), (0x99F0, &[0xEC, 0x65]),
    (0x9A0E, &[0xC3, 0x4D]), (0x9A2C, &[0xF5, 0x5D]), (0x9A4A, &[0xF7, 0x7E]), (0x9A68, &[0xF9, 0xC3]),
    (0x9AA8, &[0xB0, 0xA9]), (0x9AC6, &[0xF5, 0x66]), (0x9AE6, &[0xBB, 0xEC]), (0x9B04, &[0xF1, 0xBC]),
    (0x9B22, &[0xC6, 0x4B]), (0x9B41, &[0xBB, 0xED]), (0x9B5F, &[0xE4, 0xE1]), (0x9B7D, &[0xEC, 0xA1]),
    (0x9B9B, &[0xEF, 0x6D]), (0x9BB9, &[0xF1, 0xCD]), (0x9BD7, &[0xF3, 0xD0]), (0x9BF7, &[0xF5, 0x6C]),
    (0x9C17, &[0xF5, 0x74]), (0x9C36, &[0xF7, 0xB6]), (0x9C54, &[0xC5, 0xEB]), (0x9C73, &[0xF9, 0x78]),
    (0x9CE5, &[0xB3, 0xBE]), (0x9D03, &[0xBE, 0xA1]), (0x9D22, &[0xEC, 0xAB]), (0x9D40, &[0xEF, 0xA6]),
    (0x9D5F, &[0xF1, 0xDB]), (0x9D7D, &[0xF3, 0xE3]), (0x9D9B, &[0xF5, 0x7E]), (0x9DB9, &[0xF6, 0xBF]),
    (0x9DD7, &[0xC5, 0xC3]), (0x9DF5, &[0xF7, 0xC4]), (0x9E13, &[0xF9, 0x7C]), (0x9E75, &[0xB3, 0xBF]),
    (0x9E93, &[0xC4, 0x53]), (0x9EB4, &[0xC4, 0x54]), (0x9ED3, &[0xE8, 0xF1]), (0x9EF2, &[0xF8, 0x76]),
    (0x9F10, &[0xE8, 0xF3]), (0x9F2E, &[0xF5, 0xB9]), (0x9F4C, &[0xF1, 0xE9]), (0x9F6A, &[0xC5, 0xC6]),
    (0x9F8D, &[0xC0, 0x73]), (0xE000, &[0xFA, 0x40]), (0xE01E, &[0xFA, 0x5E]), (0xE03C, &[0xFA, 0x7C]),
    (0xE05A, &[0xFA, 0xBC]), (0xE078, &[0xFA, 0xDA]), (0xE096, &[0xFA, 0xF8]), (0xE0B4, &[0xFB, 0x57]),
    (0xE0D2, &[0xFB, 0x75]), (0xE0F0, &[0xFB, 0xB5]), (0xE10E, &[0xFB, 0xD3]), (0xE12C, &[0xFB, 0xF1]),
    (0xE14A, &[0xFC, 0x50]), (0xE168, &[0xFC, 0x6E]), (0xE186, &[0xFC, 0xAE]), (0xE1A4, &[0xFC, 0xCC]),
    (0xE1C2, &[0xFC, 0xEA]), (0xE1E0, &[0xFD, 0x49]), (0xE1FE, &[0xFD, 0x67]), (0xE21C, &[0xFD, 0xA7]),
    (0xE23A, &[0xFD, 0xC5]), (0xE258, &[0xFD, 0xE3]), (0xE276, &[0xFE, 0x42]), (0xE294, &[0xFE, 0x60]),
    (0xE2B2, &[0xFE, 0x7E]), (0xE2D0, &[0xFE, 0xBE]), (0xE2EE, &[0xFE, 0xDC]), (0xE30C, &[0xFE, 0xFA]),
    (0xE32A, &[0x8E, 0x59]), (0xE348, &[0x8E, 0x77]), (0xE366, &[0x8E, 0xB7]), (0xE384, &[0x8E, 0xD5]),
    (0xE3A2, &[0x8E, 0xF3]), (0xE3C0, &[0x8F, 0x52]), (0xE3DE, &[0x8F, 0x70]), (0xE3FC, &[0x8F, 0xB0]),
    (0xE41A, &[0x8F, 0xCE]), (0xE438, &[0x8F, 0xEC]), (0xE456, &[0x90, 0x4B]), (0xE474, &[0x90, 0x69]),
    (0xE492, &[0x90, 0xA9]), (0xE4B0, &[0x90, 0xC7]), (0xE4CE, &[0x90, 0xE5]), (0xE4EC, &[0x91, 0x44]),
    (0xE50A, &[0x91, 0x62]), (0xE528, &[0x91, 0xA2]), (0xE546, &[0x91, 0xC0]), (0xE564, &[0x91, 0xDE]),
    (0xE582, &[0x91, 0xFC]), (0xE5A0, &[0x92, 0x5B]), (0xE5BE, &[0x92, 0x79]), (0xE5DC, &[0x92, 0xB9]),
    (0xE5FA, &[0x92, 0xD7]), (0xE618, &[0x92, 0xF5]), (0xE636, &[0x93, 0x54]), (0xE654, &[0x93, 0x72]),
    (0xE672, &[0x93, 0xB2]), (0xE690, &[0x93, 0xD0]), (0xE6AE, &[0x93, 0xEE]), (0xE6CC, &[0x94, 0x4D]),
    (0xE6EA, &[0x94, 0x6B]), (0xE708, &[0x94, 0xAB]), (0xE726, &[0x94, 0xC9]), (0xE744, &[0x94, 0xE7]),
    (0xE762, &[0x95, 0x46]), (0xE780, &[0x95, 0x64]), (0xE79E, &[0x95, 0xA4]), (0xE7BC, &[0x95, 0xC2]),
    (0xE7DA, &[0x95, 0xE0]), (0xE7F8, &[0x95, 0xFE]), (0xE816, &[0x96, 0x5D]), (0xE834, &[0x96, 0x7B]),
    (0xE852, &[0x96, 0xBB]), (0xE870, &[0x96, 0xD9]), (0xE88E, &[0x96, 0xF7]), (0xE8AC, &[0x97, 0x56]),
    (0xE8CA, &[0x97, 0x74]), (0xE8E8, &[0x97, 0xB4]), (0xE906, &[0x97, 0xD2]), (0xE924, &[0x97, 0xF0]),
    (0xE942, &[0x98, 0x4F]), (0xE960, &[0x98, 0x6D]), (0xE97E, &[0x98, 0xAD]), (0xE99C, &[0x98, 0xCB]),
    (0xE9BA, &[0x98, 0xE9]), (0xE9D8, &[0x99, 0x48]), (0xE9F6, &[0x99, 0x66]), (0xEA14, &[0x99, 0xA6]),
    (0xEA32, &[0x99, 0xC4]), (0xEA50, &[0x99, 0xE2]), (0xEA6E, &[0x9A, 0x41]), (0xEA8C, &[0x9A, 0x5F]),
    (0xEAAA, &[0x9A, 0x7D]), (0xEAC8, &[0x9A, 0xBD]), (0xEAE6, &[0x9A, 0xDB]), (0xEB04, &[0x9A, 0xF9]),
    (0xEB22, &[0x9B, 0x58]), (0xEB40, &[0x9B, 0x76]), (0xEB5E, &[0x9B, 0xB6]), (0xEB7C, &[0x9B, 0xD4]),
    (0xEB9A, &[0x9B, 0xF2]), (0xEBB8, &[0x9C, 0x51]), (0xEBD6, &[0x9C, 0x6F]), (0xEBF4, &[0x9C, 0xAF]),
    (0xEC12, &[0x9C, 0xCD]), (0xEC30, &[0x9C, 0xEB]), (0xEC4E, &[0x9D, 0x4A]), (0xEC6C, &[0x9D, 0x68]),
    (0xEC8A, &[0x9D, 0xA8]), (0xECA8, &[0x9D, 0xC6]), (0xECC6, &[0x9D, 0xE4]), (0xECE4, &[0x9E, 0x43]),
    (0xED02, &[0x9E, 0x61]), (0xED20, &[0x9E, 0xA1]), (0xED3E, &[0x9E, 0xBF]), (0xED5C, &[0x9E, 0xDD]),
    (0xED7A, &[0x9E, 0xFB]), (0xED98, &[0x9F, 0x5A]), (0xEDB6, &[0x9F, 0x78]), (0xEDD4, &[0x9F, 0xB8]),
    (0xEDF2, &[0x9F, 0xD6]), (0xEE10, &[0x9F, 0xF4]), (0xEE2E, &[0xA0, 0x53]), (0xEE4C, &[0xA0, 0x71]),
    (0xEE6A, &[0xA0, 0xB1]), (0xEE88, &[0xA0, 0xCF]), (0xEEA6, &[0xA0, 0xED]), (0xEEC4, &[0x81, 0x4C]),
    (0xEEE2, &[0x81, 0x6A]), (0xEF00, &[0x81, 0xAA]), (0xEF1E, &[0x81, 0xC8]), (0xEF3C, &[0x81, 0xE6]),
    (0xEF5A, &[0x82, 0x45]), (0xEF78, &[0x82, 0x63]), (0xEF96, &[0x82, 0xA3]), (0xEFB4, &[0x82, 0xC1]),
    (0xEFD2, &[0x82, 0xDF]), (0xEFF0, &[0x82, 0xFD]), (0xF00E, &[0x83, 0x5C]), (0xF02C, &[0x83, 0x7A]),
    (0xF04A, &[0x83, 0xBA]), (0xF068, &[0x83, 0xD8]), (0xF086, &[0x83, 0xF6]), (0xF0A4, &[0x84, 0x55]),
    (0xF0C2, &[0x84, 0x73]), (0xF0E0, &[0x84, 0xB3]), (0xF0FE, &[0x84, 0xD1]), (0xF11C, &[0x84, 0xEF]),
    (0xF13A, &[0x85, 0x4E]), (0xF158, &[0x85, 0x6C]), (0xF176, &[0x85, 0xAC]), (0xF194, &[0x85, 0xCA]),
    (0xF1B2, &[0x85, 0xE8]), (0xF1D0, &[0x86, 0x47]), (0xF1EE, &[0x86, 0x65]), (0xF20C, &[0x86, 0xA5]),
    (0xF22A, &[0x86, 0xC3]), (0xF248, &[0x86, 0xE1]), (0xF266, &[0x87, 0x40]), (0xF284, &[0x87, 0x5E]),
    (0xF2A2, &[0x87, 0x7C]), (0xF2C0, &[0x87, 0xBC]), (0xF2DE, &[0x87, 0xDA]), (0xF2FC, &[0x87, 0xF8]),
    (0xF31A, &[0x88, 0x57]), (0xF338, &[0x88, 0x75]), (0xF356, &[0x88, 0xB5]), (0xF374, &[0x88, 0xD3]),
    (0xF392, &[0x88, 0xF1]), (0xF3B0, &[0x89, 0x50]), (0xF3CE, &[0x89, 0x6E]), (0xF3EC, &[0x89, 0xAE]),
    (0xF40A, &[0x89, 0xCC]), (0xF428, &[0x89, 0xEA]), (0xF446, &[0x8A, 0x49]), (0xF464, &[0x8A, 0x67]),
    (0xF482, &[0x8A, 0xA7]), (0xF4A0, &[0x8A, 0xC5]), (0xF4BE, &[0x8A, 0xE3]), (0xF4DC, &[0x8B, 0x42]),
    (0xF4FA, &[0x8B, 0x60]), (0xF518, &[0x8B, 0x7E]), (0xF536, &[0x8B, 0xBE]), (0xF554, &[0x8B, 0xDC]),
    (0xF572, &[0x8B, 0xFA]), (0xF590, &[0x8C, 0x59]), (0xF5AE, &[0x8C, 0x77]), (0xF5CC, &[0x8C, 0xB7]),
    (0xF5EA, &[0x8C, 0xD5]), (0xF608, &[0x8C, 0xF3]), (0xF626, &[0x8D, 0x52]), (0xF644, &[0x8D, 0x70]),
    (0xF662, &[0x8D, 0xB0]), (0xF680, &[0x8D, 0xCE]), (0xF69E, &[0x8D, 0xEC]), (0xF6BC, &[0xC6, 0xAC]),
    (0xF6DA, &[0xC6, 0xCA]), (0xF6F8, &[0xC6, 0xE8]), (0xF716, &[0xC7, 0x47]), (0xF734, &[0xC7, 0x65]),
    (0xF752, &[0xC7, 0xA5]), (0xF770, &[0xC7, 0xC3]), (0xF78E, &[0xC7, 0xE1]), (0xF7AC, &[0xC8, 0x40]),
    (0xF7CA, &[0xC8, 0x5E]), (0xF7E8, &[0xC8, 0x7C]), (0xF806, &[0xC8, 0xBC]), (0xF824, &[0xC8, 0xDA]),
    (0xF842, &[0xC8, 0xF8]), (0xFA0C, &[0xC9, 0x4A]), (0xFE30, &[0xA1, 0x4A]), (0xFE4E, &[0xA1, 0xC9]),
    (0xFF01, &[0xA1, 0x49]), (0xFF1F, &[0xA1, 0x48]), (0xFF3F, &[0xA1, 0xC4]), (0xFF5D, &[0xA1, 0x62]),
    (0xFFE0, &[0xA2, 0x46]),
];
