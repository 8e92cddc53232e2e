use stone_core::Section;
use stone_ir::Entity;

use crate::{builder::CodeBuilder, naming::EntityName};

/// HTTP data-access service for `<name>.service.ts`, preceded by the
/// `ng g s` command that creates the file.
pub struct DataService<'a> {
    name: &'a EntityName,
    entity: &'a Entity,
    api_url: &'a str,
}

impl<'a> DataService<'a> {
    pub fn new(name: &'a EntityName, entity: &'a Entity, api_url: &'a str) -> Self {
        Self {
            name,
            entity,
            api_url,
        }
    }

    fn uses_environment(&self) -> bool {
        self.api_url == "environment" || self.api_url.starts_with("environment.")
    }
}

impl Section for DataService<'_> {
    fn title(&self) -> String {
        self.name.file(".service.ts")
    }

    fn render(&self) -> String {
        let kebab = self.name.kebab();
        let model = self.entity.type_name.as_str();
        let url = format!("`${{{}}}/{}`", self.api_url, self.name.route_path());

        CodeBuilder::angular()
            .line(&format!("// ng g s {kebab}/{kebab}"))
            .blank()
            .line("import { HttpClient } from '@angular/common/http';")
            .line("import { Injectable } from '@angular/core';")
            .line("import { Observable } from 'rxjs';")
            .when(self.uses_environment(), |b| {
                b.line("import { environment } from 'src/environments/environment';")
            })
            .line(&format!("import {{ {model} }} from './{kebab}.model';"))
            .blank()
            .block_with_close("@Injectable({", "})", |b| b.line("providedIn: 'root',"))
            .block_with_close(
                &format!("export class {}Service {{", self.name.pascal()),
                "}",
                |b| {
                    b.line(&format!("private readonly url = {url};"))
                        .blank()
                        .line("constructor(private http: HttpClient) {}")
                        .blank()
                        .block_with_close(&format!("list(): Observable<{model}[]> {{"), "}", |b| {
                            b.line(&format!("return this.http.get<{model}[]>(this.url);"))
                        })
                        .blank()
                        .block_with_close(
                            &format!("get(id: number): Observable<{model}> {{"),
                            "}",
                            |b| b.line(&format!("return this.http.get<{model}>(`${{this.url}}/${{id}}`);")),
                        )
                        .blank()
                        .block_with_close(
                            &format!("create(item: {model}): Observable<{model}> {{"),
                            "}",
                            |b| b.line(&format!("return this.http.post<{model}>(this.url, item);")),
                        )
                        .blank()
                        .block_with_close(
                            &format!("update(id: number, item: {model}): Observable<{model}> {{"),
                            "}",
                            |b| {
                                b.line(&format!(
                                    "return this.http.put<{model}>(`${{this.url}}/${{id}}`, item);"
                                ))
                            },
                        )
                        .blank()
                        .block_with_close("delete(id: number): Observable<void> {", "}", |b| {
                            b.line("return this.http.delete<void>(`${this.url}/${id}`);")
                        })
                },
            )
            .build()
    }
}
